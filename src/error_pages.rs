//! Full-page responses for missing routes and internal server errors.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page rendered as a full HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPage<'a> {
    /// 404, the requested route does not exist.
    NotFound,
    /// 500, something went wrong while handling the request.
    InternalServerError { description: &'a str, fix: &'a str },
}

impl ErrorPage<'_> {
    /// An internal server error page with a generic description.
    pub fn internal_server_error() -> Self {
        Self::InternalServerError {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_html(self) -> Html<String> {
        let page = match self {
            Self::NotFound => error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page. Your expenses are on the home page.",
            ),
            Self::InternalServerError { description, fix } => {
                error_view("Internal Server Error", "500", description, fix)
            }
        };

        Html(page.into_string())
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        (self.status(), self.into_html()).into_response()
    }
}

/// The fallback handler for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    ErrorPage::NotFound.into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_server_error().into_response()
}
