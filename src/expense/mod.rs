//! Expense management for the expense tracker.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the rules for validating expense form data
//! - The in-memory `ExpenseStore` that owns the expense list
//! - View handlers and endpoints for adding, filtering and deleting expenses

mod category;
mod create_endpoint;
mod delete_endpoint;
mod domain;
mod expenses_page;
mod form;
mod store;
mod validation;

pub use category::{Categories, CategoryError, CategoryFilter, DEFAULT_CATEGORIES};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use domain::{Expense, ExpenseFormData, ExpenseId, ExpenseRecord};
pub use expenses_page::get_expenses_page;
pub use store::{ExpenseStore, total};
pub use validation::{
    AMOUNT_MAX, DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, ExpenseField, ValidationError,
    ValidationErrors, validate,
};
