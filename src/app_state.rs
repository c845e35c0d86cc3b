//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::expense::ExpenseStore;

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The expenses for the current session.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState] that shares `expense_store` between requests.
    pub fn new(expense_store: ExpenseStore) -> Self {
        Self {
            expense_store: Arc::new(Mutex::new(expense_store)),
        }
    }
}
