//! Subscription editing page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::SubscriptionId,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    subscription::{
        SubscriptionForm, form::subscription_form_fields, get_subscription, update_subscription,
    },
};

/// The state needed for the edit subscription page and the update endpoint.
#[derive(Debug, Clone)]
pub struct EditSubscriptionState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditSubscriptionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the subscription editing page, prefilled with the stored subscription.
pub async fn get_edit_subscription_page(
    Path(subscription_id): Path<SubscriptionId>,
    State(state): State<EditSubscriptionState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let subscription =
        get_subscription(subscription_id, &connection).inspect_err(|error| match error {
            Error::NotFound => tracing::debug!("subscription {subscription_id} not found"),
            _ => tracing::error!("Failed to retrieve subscription {subscription_id}: {error}"),
        })?;

    Ok(edit_subscription_view(subscription_id, &SubscriptionForm::from(&subscription))
        .into_response())
}

/// Handle subscription update form submission.
///
/// An unticked active checkbox deactivates the subscription.
pub async fn update_subscription_endpoint(
    Path(subscription_id): Path<SubscriptionId>,
    State(state): State<EditSubscriptionState>,
    Form(form): Form<SubscriptionForm>,
) -> Response {
    let fields = match form.parse() {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("rejected update to subscription {subscription_id}: {error}");
            return error.into_alert_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match update_subscription(subscription_id, fields, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::SUBSCRIPTIONS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(Error::UpdateMissingSubscription) => {
            Error::UpdateMissingSubscription.into_alert_response()
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating subscription {subscription_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

fn edit_subscription_view(subscription_id: SubscriptionId, values: &SubscriptionForm) -> Markup {
    let edit_endpoint =
        endpoints::format_endpoint(endpoints::EDIT_SUBSCRIPTION_VIEW, subscription_id);
    let update_endpoint = endpoints::format_endpoint(endpoints::SUBSCRIPTION, subscription_id);
    let nav_bar = NavBar::new(&edit_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Edit Subscription" }

            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                (subscription_form_fields(values))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
            }
        }
    };

    base("Edit Subscription", &[dollar_input_styles()], &content)
}
