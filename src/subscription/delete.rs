//! Subscription deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, alert::Alert, database_id::SubscriptionId,
    subscription::delete_subscription,
};

/// The state needed for deleting a subscription.
#[derive(Debug, Clone)]
pub struct DeleteSubscriptionEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteSubscriptionEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle subscription deletion. Returns a success alert, even if the
/// subscription was already gone.
pub async fn delete_subscription_endpoint(
    Path(subscription_id): Path<SubscriptionId>,
    State(state): State<DeleteSubscriptionEndpointState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_subscription(subscription_id, &connection) {
        Ok(()) => Alert::SuccessSimple {
            message: "Subscription deleted successfully".to_owned(),
        }
        .into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting subscription {subscription_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
