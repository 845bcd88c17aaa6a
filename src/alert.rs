//! Alert system for displaying success and error messages to users.
//!
//! Alerts are HTML fragments that HTMX swaps into the `#alert-container`
//! element rendered by [crate::html::base], via `hx-target-error` on forms
//! and buttons.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An alert message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message without details.
    SuccessSimple {
        /// The headline of the alert.
        message: String,
    },
    /// An error message with a description of what went wrong.
    Error {
        /// The headline of the alert.
        message: String,
        /// What went wrong and how the user might fix it.
        details: String,
    },
}

impl Alert {
    fn view(&self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::SuccessSimple { message } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message.as_str(),
                "",
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message.as_str(),
                details.as_str(),
            ),
        };

        html! {
            div
                role="alert"
                class=(container_style)
                onclick="this.remove()"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    span { (details) }
                }
            }
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.view().into_string())
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
