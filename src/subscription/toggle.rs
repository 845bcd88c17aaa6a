//! Endpoint for switching a subscription on or off.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use rusqlite::Connection;

use crate::{
    AppState, Error, database_id::SubscriptionId, endpoints, subscription::toggle_subscription,
};

/// The state needed for toggling a subscription.
#[derive(Debug, Clone)]
pub struct ToggleSubscriptionEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ToggleSubscriptionEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Flip whether a subscription is active, then send the client back to the
/// subscriptions page so both totals are recalculated.
pub async fn toggle_subscription_endpoint(
    Path(subscription_id): Path<SubscriptionId>,
    State(state): State<ToggleSubscriptionEndpointState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match toggle_subscription(subscription_id, &connection) {
        Ok(()) => (
            HxRedirect(endpoints::SUBSCRIPTIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while toggling subscription {subscription_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
