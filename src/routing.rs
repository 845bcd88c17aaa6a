//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    error_page::{get_404_not_found, get_internal_server_error_page},
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_edit_expense_page,
        get_expenses_json, get_expenses_page, get_new_expense_page, update_expense_endpoint,
    },
    subscription::{
        create_subscription_endpoint, delete_subscription_endpoint, get_edit_subscription_page,
        get_new_subscription_page, get_subscriptions_json, get_subscriptions_page,
        toggle_subscription_endpoint, update_subscription_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_new_expense_page))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(get_edit_expense_page))
        .route(endpoints::SUBSCRIPTIONS_VIEW, get(get_subscriptions_page))
        .route(
            endpoints::NEW_SUBSCRIPTION_VIEW,
            get(get_new_subscription_page),
        )
        .route(
            endpoints::EDIT_SUBSCRIPTION_VIEW,
            get(get_edit_subscription_page),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses_json).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            put(update_expense_endpoint).delete(delete_expense_endpoint),
        )
        .route(
            endpoints::SUBSCRIPTIONS_API,
            get(get_subscriptions_json).post(create_subscription_endpoint),
        )
        .route(
            endpoints::SUBSCRIPTION,
            put(update_subscription_endpoint).delete(delete_subscription_endpoint),
        )
        .route(
            endpoints::TOGGLE_SUBSCRIPTION,
            post(toggle_subscription_endpoint),
        );

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_expenses() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::EXPENSES_VIEW);
    }
}
