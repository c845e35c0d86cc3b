//! Start-up configuration for the expense store.

use crate::{
    Error,
    expense::{Categories, DEFAULT_CATEGORIES, Expense, ExpenseStore},
};

/// The settings used to create the [ExpenseStore] for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// The category labels, in the order they should be shown.
    pub categories: Vec<String>,
    /// Whether to start with a few sample expenses instead of an empty list.
    pub seed_sample: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|&label| label.to_owned()).collect(),
            seed_sample: false,
        }
    }
}

impl StoreConfig {
    /// Build the expense store described by this config.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCategories] if the category labels are empty or
    /// contain duplicates, or if the sample expenses are requested but their
    /// categories are not configured.
    pub fn into_store(self) -> Result<ExpenseStore, Error> {
        let categories = Categories::new(&self.categories)?;

        let seed = if self.seed_sample {
            let sample = sample_expenses();

            if let Some(missing) = sample
                .iter()
                .find(|expense| !categories.contains(expense.category()))
            {
                return Err(Error::MissingSampleCategory(missing.category().to_owned()));
            }

            sample
        } else {
            Vec::new()
        };

        tracing::info!(
            "Creating expense store with categories {:?} and {} expense(s)",
            categories.iter().collect::<Vec<_>>(),
            seed.len()
        );

        Ok(ExpenseStore::new(categories, seed))
    }
}

/// A handful of expenses for trying out the app.
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new_unchecked("Milk", 5.0, "Grocery"),
        Expense::new_unchecked("Eggs", 10.0, "Grocery"),
        Expense::new_unchecked("Electricity", 100.0, "Utility"),
    ]
}
