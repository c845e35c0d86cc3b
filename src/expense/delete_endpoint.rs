//! Expense deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    expense::{ExpenseId, ExpenseStore},
};

/// The state needed for deleting an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The store the expense is removed from.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// Handle expense deletion.
///
/// Deleting an expense that is not in the store is not an error, the
/// expense is gone either way. The status code has to be 200 OK for HTMX to
/// remove the table row.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<DeleteExpenseState>,
) -> Response {
    let mut store = match state.expense_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let message = match store.remove_by_id(expense_id) {
        Some(expense) => {
            tracing::info!(
                "Deleted expense {expense_id} ({:?}), {} expense(s) left",
                expense.description(),
                store.len()
            );
            "Expense deleted"
        }
        None => {
            tracing::debug!("Expense {expense_id} was already deleted");
            "Expense already deleted"
        }
    };

    Alert::SuccessSimple {
        message: message.to_owned(),
    }
    .into_response()
}
