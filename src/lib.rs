//! Expense Tracker is a small web app for keeping track of everyday expenses.
//!
//! Expenses are added through a validated form, filtered by category, and
//! deleted from a list. Everything lives in memory for the lifetime of the
//! server process.
//!
//! The core model can be used on its own:
//!
//! ```
//! use expense_tracker::{Categories, CategoryFilter, ExpenseFormData, ExpenseStore};
//!
//! let categories = Categories::new(["Grocery", "Utility"]).unwrap();
//! let mut store = ExpenseStore::new(categories, []);
//!
//! let milk = store
//!     .validate(&ExpenseFormData::new("Milk", "5", "Grocery"))
//!     .unwrap();
//! store.add(milk.clone());
//!
//! assert_eq!(store.filter(&CategoryFilter::parse("Utility")).len(), 0);
//! assert_eq!(store.remove(&milk), 1);
//! assert!(store.is_empty());
//! ```

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod config;
mod endpoints;
mod error_pages;
mod expense;
mod html;
mod logging;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{StoreConfig, sample_expenses};
pub use expense::{
    AMOUNT_MAX, Categories, CategoryError, CategoryFilter, DEFAULT_CATEGORIES,
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, Expense, ExpenseField, ExpenseFormData,
    ExpenseId, ExpenseRecord, ExpenseStore, ValidationError, ValidationErrors, total, validate,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{alert::Alert, error_pages::ErrorPage};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// Invalid user input is not an error here: it is reported per field via
/// [ValidationErrors] and rendered next to the form.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The configured category labels are not a valid category set.
    #[error("invalid category configuration: {0}")]
    InvalidCategories(#[from] CategoryError),

    /// The sample expenses were requested but one of their categories is not configured.
    #[error("the sample expenses need the category \"{0}\", which is not configured")]
    MissingSampleCategory(String),

    /// Could not acquire the lock for the expense store, e.g., because another
    /// request panicked while holding it.
    #[error("could not acquire the expense store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StoreLockError => ErrorPage::InternalServerError {
                description: "Expenses Unavailable",
                fix: "The expense list could not be read. Restart the server and try again.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_server_error().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let alert = match self {
            Error::StoreLockError => Alert::Error {
                message: "Expenses unavailable".to_owned(),
                details: "The expense list could not be updated. \
                    Restart the server and try again."
                    .to_owned(),
            },
            _ => Alert::Error {
                message: "Something went wrong".to_owned(),
                details: "An unexpected error occurred, check the server logs for more details."
                    .to_owned(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, alert).into_response()
    }
}
