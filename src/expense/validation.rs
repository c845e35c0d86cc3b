//! Validation rules for turning raw form data into an [Expense].
//!
//! Each field is checked independently and every violation is collected, so
//! the user sees all problems with their input at once rather than one at a
//! time.

use std::{collections::BTreeMap, fmt::Display};

use unicode_segmentation::UnicodeSegmentation;

use crate::expense::{Categories, Expense, ExpenseFormData};

/// The minimum number of characters in a description, after trimming.
pub const DESCRIPTION_MIN_LENGTH: usize = 3;
/// The maximum number of characters in a description, after trimming.
pub const DESCRIPTION_MAX_LENGTH: usize = 50;
/// The largest amount a single expense may have.
pub const AMOUNT_MAX: f64 = 100_000.0;

/// The fields of the expense form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpenseField {
    /// The description text input.
    Description,
    /// The amount number input.
    Amount,
    /// The category selector.
    Category,
}

impl ExpenseField {
    /// The name of the form input for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
        }
    }
}

impl Display for ExpenseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A rule that a single field of the expense form failed.
///
/// The display text is the message shown to the user next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The trimmed description is shorter than [DESCRIPTION_MIN_LENGTH].
    #[error("Description must be at least 3 characters.")]
    DescriptionTooShort,

    /// The trimmed description is longer than [DESCRIPTION_MAX_LENGTH].
    #[error("Description must be at most 50 characters.")]
    DescriptionTooLong,

    /// The amount was empty or could not be parsed as a finite number.
    #[error("Amount is required.")]
    AmountMissing,

    /// The amount was zero or negative.
    #[error("Amount must be positive.")]
    AmountNotPositive,

    /// The amount was larger than [AMOUNT_MAX].
    #[error("Amount must be at most 100,000.")]
    AmountTooLarge,

    /// The category was empty or not one of the configured categories.
    #[error("Category is required.")]
    UnknownCategory,
}

/// The validation errors for an expense form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) of the expense form are invalid", .0.len())]
pub struct ValidationErrors(BTreeMap<ExpenseField, ValidationError>);

impl ValidationErrors {
    fn insert(&mut self, field: ExpenseField, error: ValidationError) {
        self.0.insert(field, error);
    }

    /// The error for `field`, if that field is invalid.
    pub fn get(&self, field: ExpenseField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// The user-facing message for `field`, if that field is invalid.
    pub fn message(&self, field: ExpenseField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// The invalid fields and their errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseField, ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// The number of invalid fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every field is valid.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate `candidate` against the expense rules and the configured `categories`.
///
/// # Errors
///
/// Returns [ValidationErrors] containing one error for each invalid field.
pub fn validate(
    candidate: &ExpenseFormData,
    categories: &Categories,
) -> Result<Expense, ValidationErrors> {
    let description = validate_description(&candidate.description);
    let amount = validate_amount(&candidate.amount);
    let category = validate_category(&candidate.category, categories);

    match (description, amount, category) {
        (Ok(description), Ok(amount), Ok(category)) => {
            Ok(Expense::new_unchecked(description, amount, category))
        }
        (description, amount, category) => {
            let mut errors = ValidationErrors::default();

            if let Err(error) = description {
                errors.insert(ExpenseField::Description, error);
            }

            if let Err(error) = amount {
                errors.insert(ExpenseField::Amount, error);
            }

            if let Err(error) = category {
                errors.insert(ExpenseField::Category, error);
            }

            Err(errors)
        }
    }
}

/// Length is counted in grapheme clusters so that, e.g., "é" written as 'e'
/// plus a combining accent counts as one character.
fn validate_description(description: &str) -> Result<&str, ValidationError> {
    let description = description.trim();
    let length = description.graphemes(true).count();

    if length < DESCRIPTION_MIN_LENGTH {
        Err(ValidationError::DescriptionTooShort)
    } else if length > DESCRIPTION_MAX_LENGTH {
        Err(ValidationError::DescriptionTooLong)
    } else {
        Ok(description)
    }
}

fn validate_amount(amount: &str) -> Result<f64, ValidationError> {
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| ValidationError::AmountMissing)?;

    // Infinite values fall through to the range checks below.
    if amount.is_nan() {
        Err(ValidationError::AmountMissing)
    } else if amount <= 0.0 {
        Err(ValidationError::AmountNotPositive)
    } else if amount > AMOUNT_MAX {
        Err(ValidationError::AmountTooLarge)
    } else {
        Ok(amount)
    }
}

fn validate_category<'a>(
    category: &'a str,
    categories: &Categories,
) -> Result<&'a str, ValidationError> {
    if categories.contains(category) {
        Ok(category)
    } else {
        Err(ValidationError::UnknownCategory)
    }
}
