//! Subscription listing page and JSON endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    aggregate::{active_total, total},
    database_id::SubscriptionId,
    endpoints,
    html::{
        BADGE_MUTED_STYLE, BADGE_STYLE, BUTTON_LINK_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, edit_delete_action_links,
        format_currency,
    },
    navigation::NavBar,
    subscription::{Subscription, get_all_subscriptions},
};

/// The state needed for listing subscriptions.
#[derive(Debug, Clone)]
pub struct SubscriptionsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SubscriptionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SubscriptionJson {
    id: SubscriptionId,
    name: String,
    amount: f64,
    billing_day: u8,
    category: String,
    payment_method: String,
    active: bool,
}

impl From<Subscription> for SubscriptionJson {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            name: subscription.name,
            amount: subscription.amount,
            billing_day: subscription.billing_day,
            category: subscription.category,
            payment_method: subscription.payment_method,
            active: subscription.active,
        }
    }
}

#[derive(Debug, Serialize)]
struct SubscriptionListJson {
    subscriptions: Vec<SubscriptionJson>,
    total: f64,
    active_total: f64,
}

fn load_subscriptions(state: &SubscriptionsPageState) -> Result<Vec<Subscription>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    get_all_subscriptions(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve subscriptions: {error}"))
}

/// Render the subscriptions page with the total of all subscriptions and the
/// total of the active ones.
pub async fn get_subscriptions_page(
    State(state): State<SubscriptionsPageState>,
) -> Result<Response, Error> {
    let subscriptions = load_subscriptions(&state)?;

    Ok(subscriptions_view(&subscriptions).into_response())
}

/// List every subscription and both totals as JSON.
pub async fn get_subscriptions_json(State(state): State<SubscriptionsPageState>) -> Response {
    let subscriptions = match load_subscriptions(&state) {
        Ok(subscriptions) => subscriptions,
        Err(error) => return error.into_alert_response(),
    };

    let body = SubscriptionListJson {
        total: total(&subscriptions),
        active_total: active_total(&subscriptions),
        subscriptions: subscriptions.into_iter().map(SubscriptionJson::from).collect(),
    };

    (StatusCode::OK, Json(body)).into_response()
}

fn subscriptions_view(subscriptions: &[Subscription]) -> Markup {
    let new_subscription_route = endpoints::NEW_SUBSCRIPTION_VIEW;
    let nav_bar = NavBar::new(endpoints::SUBSCRIPTIONS_VIEW).into_html();

    let table_row = |subscription: &Subscription| {
        let edit_url =
            endpoints::format_endpoint(endpoints::EDIT_SUBSCRIPTION_VIEW, subscription.id);
        let delete_url = endpoints::format_endpoint(endpoints::SUBSCRIPTION, subscription.id);
        let toggle_url =
            endpoints::format_endpoint(endpoints::TOGGLE_SUBSCRIPTION, subscription.id);
        let confirm_message = format!(
            "Are you sure you want to delete the subscription '{}'?",
            subscription.name
        );
        let (status, status_style, toggle_label) = if subscription.active {
            ("Active", BADGE_STYLE, "Pause")
        } else {
            ("Paused", BADGE_MUTED_STYLE, "Resume")
        };

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (subscription.name) }
                td class="px-6 py-4 text-right" { (format_currency(subscription.amount)) }
                td class=(TABLE_CELL_STYLE) { (subscription.billing_day) }
                td class=(TABLE_CELL_STYLE) { (subscription.category) }
                td class=(TABLE_CELL_STYLE) { (subscription.payment_method) }
                td class=(TABLE_CELL_STYLE)
                {
                    span class=(status_style) { (status) }
                }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        button
                            type="button"
                            hx-post=(toggle_url)
                            hx-target-error="#alert-container"
                            class=(BUTTON_LINK_STYLE)
                        {
                            (toggle_label)
                        }

                        (edit_delete_action_links(
                            &edit_url,
                            &delete_url,
                            &confirm_message,
                            "closest tr",
                            "delete",
                        ))
                    }
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Subscriptions" }

                    a href=(new_subscription_route) class=(LINK_STYLE) { "Add Subscription" }
                }

                dl class="flex gap-8 text-lg"
                {
                    div id="subscriptions-total"
                    {
                        dt class="text-sm text-gray-500 dark:text-gray-400" { "Monthly total" }
                        dd class="font-semibold" { (format_currency(total(subscriptions))) }
                    }

                    div id="subscriptions-active-total"
                    {
                        dt class="text-sm text-gray-500 dark:text-gray-400" { "Active total" }
                        dd class="font-semibold" { (format_currency(active_total(subscriptions))) }
                    }
                }

                div class="overflow-x-auto dark:bg-gray-800"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class="px-6 py-4 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Billing day" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Payment method" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for subscription in subscriptions {
                                (table_row(subscription))
                            }

                            @if subscriptions.is_empty() {
                                tr
                                {
                                    td
                                        colspan="7"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No subscriptions yet. "
                                        a href=(new_subscription_route) class=(LINK_STYLE)
                                        {
                                            "Add your first subscription"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Subscriptions", &[], &content)
}
