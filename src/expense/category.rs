//! The closed set of category labels and the category filter.

use std::fmt::Display;

use crate::expense::Expense;

/// The categories used when none are configured.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["Grocery", "Utility"];

/// Errors that occur when building a [Categories] set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// No category labels were given.
    #[error("at least one category must be configured")]
    NoCategories,

    /// A category label was empty or only contained whitespace.
    #[error("category labels cannot be empty")]
    EmptyLabel,

    /// The same category label was given more than once.
    #[error("the category \"{0}\" is listed more than once")]
    DuplicateLabel(String),
}

/// An ordered list of distinct, non-empty category labels.
///
/// The order is the order the labels were configured in and is used when
/// rendering category selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories(Vec<String>);

impl Categories {
    /// Create a category set from `labels`.
    ///
    /// Surrounding whitespace is removed from each label.
    ///
    /// # Errors
    ///
    /// Returns a [CategoryError] if `labels` is empty, contains an empty label,
    /// or contains the same label twice.
    pub fn new<I, S>(labels: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<String> = Vec::new();

        for label in labels {
            let label = label.as_ref().trim();

            if label.is_empty() {
                return Err(CategoryError::EmptyLabel);
            }

            if categories.iter().any(|existing| existing == label) {
                return Err(CategoryError::DuplicateLabel(label.to_owned()));
            }

            categories.push(label.to_owned());
        }

        if categories.is_empty() {
            return Err(CategoryError::NoCategories);
        }

        Ok(Self(categories))
    }

    /// Whether `label` is one of the configured categories.
    ///
    /// Matching is exact and case-sensitive.
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|category| category == label)
    }

    /// The category labels in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The number of configured categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no categories are configured, which [Categories::new] never produces.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|&label| label.to_owned()).collect())
    }
}

/// Selects which expenses to show in the expense list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every expense.
    #[default]
    All,
    /// Show only the expenses in the given category.
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter from the value of the category selector.
    ///
    /// An empty string selects all categories. Any other value is taken as a
    /// category label verbatim; a label that is not configured matches nothing.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// Whether `expense` passes the filter.
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => expense.category() == category,
        }
    }

    /// The value to use for the category selector, the inverse of [CategoryFilter::parse].
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => "",
            Self::Only(category) => category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All categories"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}


#[cfg(test)]
mod category_filter_tests {
    use crate::expense::Expense;

    use super::CategoryFilter;

    #[test]
    fn empty_value_selects_all() {
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    }

    #[test]
    fn value_selects_single_category() {
        assert_eq!(
            CategoryFilter::parse("Utility"),
            CategoryFilter::Only("Utility".to_owned())
        );
    }

    #[test]
    fn query_value_round_trips() {
        for value in ["", "Grocery"] {
            assert_eq!(CategoryFilter::parse(value).as_query_value(), value);
        }
    }

    #[test]
    fn matches_by_exact_category() {
        let milk = Expense::new_unchecked("Milk", 5.0, "Grocery");

        assert!(CategoryFilter::All.matches(&milk));
        assert!(CategoryFilter::parse("Grocery").matches(&milk));
        assert!(!CategoryFilter::parse("grocery").matches(&milk));
        assert!(!CategoryFilter::parse("Utility").matches(&milk));
    }
}
