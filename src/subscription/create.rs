//! Subscription creation page and endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
    subscription::{SubscriptionForm, create_subscription, form::subscription_form_fields},
};

/// The state needed for creating a subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateSubscriptionEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the subscription creation page.
///
/// The active checkbox starts ticked.
pub async fn get_new_subscription_page() -> Response {
    let values = SubscriptionForm {
        name: String::new(),
        amount: String::new(),
        billing_day: "1".to_owned(),
        category: String::new(),
        payment_method: String::new(),
        active: Some("on".to_owned()),
    };

    new_subscription_view(&values).into_response()
}

/// Handle subscription creation form submission.
pub async fn create_subscription_endpoint(
    State(state): State<CreateSubscriptionEndpointState>,
    Form(form): Form<SubscriptionForm>,
) -> Response {
    let fields = match form.parse() {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("rejected new subscription: {error}");
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

    match create_subscription(fields, &connection) {
        Ok(subscription) => {
            tracing::info!("created subscription {}", subscription.id);
            (
                HxRedirect(endpoints::SUBSCRIPTIONS_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a subscription: {error}");
            error.into_alert_response()
        }
    }
}

fn new_subscription_view(values: &SubscriptionForm) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_SUBSCRIPTION_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "New Subscription" }

            form
                hx-post=(endpoints::SUBSCRIPTIONS_API)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                (subscription_form_fields(values))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Subscription" }
            }
        }
    };

    base("Create Subscription", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod new_subscription_page_tests {
    use crate::{
        endpoints,
        subscription::get_new_subscription_page,
        test_utils::{
            assert_content_type, assert_form_checkbox, assert_form_input,
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
            assert_status_ok, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn render_page() {
        let response = get_new_subscription_page().await;

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::SUBSCRIPTIONS_API, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_input_with_value(&form, "billing_day", "number", "1");
        assert_form_input(&form, "category", "text");
        assert_form_input(&form, "payment_method", "text");
        assert_form_checkbox(&form, "active", true);
        assert_form_submit_button_with_text(&form, "Create Subscription");
    }
}
