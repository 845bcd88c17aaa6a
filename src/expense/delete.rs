//! Expense deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, alert::Alert, database_id::ExpenseId, expense::delete_expense,
};

/// The state needed for deleting an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle expense deletion. Returns a success alert, even if the expense was
/// already gone.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<DeleteExpenseEndpointState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_expense(expense_id, &connection) {
        Ok(()) => Alert::SuccessSimple {
            message: "Expense deleted successfully".to_owned(),
        }
        .into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting expense {expense_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
