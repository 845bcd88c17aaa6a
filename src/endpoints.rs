//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}/edit', use [format_endpoint].

/// The root route which redirects to the expenses page.
pub const ROOT: &str = "/";
/// The page listing all expenses and their total.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page for creating a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page for editing an existing expense.
pub const EDIT_EXPENSE_VIEW: &str = "/expenses/{expense_id}/edit";
/// The page listing all subscriptions and their totals.
pub const SUBSCRIPTIONS_VIEW: &str = "/subscriptions";
/// The page for creating a new subscription.
pub const NEW_SUBSCRIPTION_VIEW: &str = "/subscriptions/new";
/// The page for editing an existing subscription.
pub const EDIT_SUBSCRIPTION_VIEW: &str = "/subscriptions/{subscription_id}/edit";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create expenses (POST) or list them as JSON (GET).
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to update (PUT) or delete (DELETE) a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to create subscriptions (POST) or list them as JSON (GET).
pub const SUBSCRIPTIONS_API: &str = "/api/subscriptions";
/// The route to update (PUT) or delete (DELETE) a single subscription.
pub const SUBSCRIPTION: &str = "/api/subscriptions/{subscription_id}";
/// The route to flip whether a subscription is active.
pub const TOGGLE_SUBSCRIPTION: &str = "/api/subscriptions/{subscription_id}/toggle";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
