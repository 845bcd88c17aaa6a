//! Spendwise is a web app for keeping track of day-to-day expenses and
//! recurring subscriptions.
//!
//! This library provides a REST API that directly serves HTML pages, plus a
//! couple of JSON endpoints for reading the stored records.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod aggregate;
mod alert;
mod app_state;
mod config;
mod database_id;
mod db;
mod endpoints;
mod error;
mod error_page;
mod expense;
mod html;
mod input;
mod logging;
mod navigation;
mod routing;
mod subscription;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use aggregate::{MonetaryAmount, active_total, total};
pub use app_state::AppState;
pub use config::{AppConfig, DatabaseConfig};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use expense::{Expense, ExpenseFields, ExpenseForm};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use subscription::{Subscription, SubscriptionFields, SubscriptionForm};

/// Database operations for expenses, exposed for the utility binaries.
pub mod expenses {
    pub use crate::expense::{
        create_expense, delete_expense, get_all_expenses, get_expense, update_expense,
    };
}

/// Database operations for subscriptions, exposed for the utility binaries.
pub mod subscriptions {
    pub use crate::subscription::{
        create_subscription, delete_subscription, get_all_subscriptions, get_subscription,
        toggle_subscription, update_subscription,
    };
}

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
