//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, error_page::ErrorPage};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The amount could not be parsed as a number.
    ///
    /// Holds the raw text that was submitted.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The date could not be parsed as a calendar date in the format `YYYY-MM-DD`.
    ///
    /// Holds the raw text that was submitted.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The billing day was not a whole number between 1 and 31.
    ///
    /// Holds the raw text that was submitted.
    #[error("\"{0}\" is not a valid billing day, expected a number from 1 to 31")]
    InvalidBillingDay(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Tried to update an expense that does not exist
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// Tried to update a subscription that does not exist
    #[error("tried to update a subscription that is not in the database")]
    UpdateMissingSubscription,
}

impl Error {
    /// Whether the error was caused by malformed user input, as opposed to a
    /// missing record or a storage failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAmount(_) | Error::InvalidDate(_) | Error::InvalidBillingDay(_)
        )
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::UpdateMissingExpense | Error::UpdateMissingSubscription => {
                ErrorPage::NotFound.into_response()
            }
            Error::InvalidTimezoneError(timezone) => ErrorPage::InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => ErrorPage::internal_server_error().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::internal_server_error().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            error if error.is_parse_error() => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid input".to_owned(),
                    details: format!("{error}. Fix the highlighted field and try again."),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::UpdateMissingExpense => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update expense".to_owned(),
                    details: "The expense could not be found.".to_owned(),
                },
            ),
            Error::UpdateMissingSubscription => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update subscription".to_owned(),
                    details: "The subscription could not be found.".to_owned(),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Not found".to_owned(),
                    details: "The requested record could not be found. \
                    Try refreshing the page to see if it has been deleted."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn query_returned_no_rows_maps_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn other_sql_errors_are_kept() {
        let error = Error::from(rusqlite::Error::InvalidQuery);

        assert_eq!(error, Error::SqlError(rusqlite::Error::InvalidQuery));
    }

    #[test]
    fn parse_errors_are_bad_requests() {
        for error in [
            Error::InvalidAmount("abc".to_owned()),
            Error::InvalidDate("yesterday".to_owned()),
            Error::InvalidBillingDay("32".to_owned()),
        ] {
            assert!(error.is_parse_error());
            assert_eq!(
                error.into_alert_response().status(),
                StatusCode::BAD_REQUEST
            );
        }
    }

    #[test]
    fn missing_records_are_not_found() {
        assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::UpdateMissingExpense.into_alert_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::UpdateMissingSubscription.into_alert_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn storage_errors_are_internal_server_errors() {
        let error = Error::SqlError(rusqlite::Error::InvalidQuery);

        assert!(!error.is_parse_error());
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
