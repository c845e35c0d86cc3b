//! Defines the endpoint for adding a new expense.
use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseFormData, ExpenseStore, form::expense_form_view},
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The store the new expense is added to.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for adding a new expense.
///
/// Invalid form data re-renders the form with an error next to each invalid
/// field and the user's input preserved. The store is only changed when every
/// field is valid, after which the client is redirected to the expenses page.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseFormData>,
) -> Response {
    let mut store = match state.expense_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let expense = match store.validate(&form) {
        Ok(expense) => expense,
        Err(errors) => {
            tracing::warn!("Rejected expense form: {errors:?}");
            return expense_form_view(&form, &errors, store.categories()).into_response();
        }
    };

    let id = store.add(expense);
    tracing::info!("Added expense {id}, the store now has {} expense(s)", store.len());

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
