//! Full pages shown when a page cannot be rendered: 404 and 500.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with a status code and an explanation for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPage<'a> {
    /// The route or record does not exist.
    NotFound,
    /// Something went wrong on the server.
    InternalServerError {
        /// What went wrong.
        description: &'a str,
        /// What the user can do about it.
        fix: &'a str,
    },
}

impl ErrorPage<'_> {
    /// The 500 page with a generic message.
    pub fn internal_server_error() -> Self {
        ErrorPage::InternalServerError {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ErrorPage::NotFound => StatusCode::NOT_FOUND,
            ErrorPage::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_html(self) -> Html<String> {
        let markup = match self {
            ErrorPage::NotFound => error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page. Head back to your expenses to keep going.",
            ),
            ErrorPage::InternalServerError { description, fix } => {
                error_view("Internal Server Error", "500", description, fix)
            }
        };

        Html(markup.into_string())
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        (self.status_code(), self.into_html()).into_response()
    }
}

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    ErrorPage::NotFound.into_response()
}

/// Route handler for the generic internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_server_error().into_response()
}
