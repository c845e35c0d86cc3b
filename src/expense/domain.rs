//! Core expense domain types.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for an expense.
///
/// IDs increase monotonically and are never reused within a session, so two
/// expenses with identical values can still be told apart.
pub type ExpenseId = u64;

/// A validated expense.
///
/// Expenses are only created through [validate](crate::expense::validate) and
/// are never mutated afterwards. Two expenses are equal when all of their
/// fields are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    description: String,
    amount: f64,
    category: String,
}

impl Expense {
    /// Create an expense without validation.
    ///
    /// The caller should ensure that the description, amount and category
    /// satisfy the validation rules, e.g. when seeding the store with known
    /// good data.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// breaking the validation invariants causes incorrect behaviour but does
    /// not affect memory safety.
    pub fn new_unchecked(description: &str, amount: f64, category: &str) -> Self {
        Self {
            description: description.to_owned(),
            amount,
            category: category.to_owned(),
        }
    }

    /// Text detailing the expense, with surrounding whitespace removed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The value of the expense.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The category label the expense belongs to.
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// An expense together with the ID the store assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// The ID assigned by the store when the expense was added.
    pub id: ExpenseId,
    /// The expense itself.
    pub expense: Expense,
}

/// Raw form data for creating an expense.
///
/// Every field is kept as text so that missing or malformed input can be
/// reported back to the user instead of rejecting the whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFormData {
    /// Text detailing the expense.
    #[serde(default)]
    pub description: String,
    /// The amount as typed, which may be empty or not a number.
    #[serde(default)]
    pub amount: String,
    /// The selected category label, empty if none was selected.
    #[serde(default)]
    pub category: String,
}

impl ExpenseFormData {
    /// Convenience constructor, mostly useful in tests.
    pub fn new(description: &str, amount: &str, category: &str) -> Self {
        Self {
            description: description.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
        }
    }
}
