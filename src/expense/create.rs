//! Expense creation page and endpoint.

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
    expense::{ExpenseForm, create_expense, form::expense_form_fields},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    input::format_date,
    navigation::NavBar,
    timezone::local_today,
};

/// The state needed for the new expense page.
#[derive(Debug, Clone)]
pub struct NewExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the expense creation page with the date set to today.
pub async fn get_new_expense_page(
    State(state): State<NewExpensePageState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(state.local_timezone.clone()))?;

    let values = ExpenseForm {
        date: format_date(today),
        category: String::new(),
        amount: String::new(),
        description: None,
        payment_method: String::new(),
    };

    Ok(new_expense_view(&values).into_response())
}

/// Handle expense creation form submission.
///
/// Malformed input is rejected with an alert before anything is written.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseEndpointState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let fields = match form.parse() {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("rejected new expense: {error}");
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

    match create_expense(fields, &connection) {
        Ok(expense) => {
            tracing::info!("created expense {}", expense.id);
            (
                HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating an expense: {error}");
            error.into_alert_response()
        }
    }
}

fn new_expense_view(values: &ExpenseForm) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "New Expense" }

            form
                hx-post=(endpoints::EXPENSES_API)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                (expense_form_fields(values))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Expense" }
            }
        }
    };

    base("Create Expense", &[dollar_input_styles()], &content)
}


#[cfg(test)]
mod create_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        endpoints,
        expense::{
            Expense, ExpenseForm, create::CreateExpenseEndpointState, create_expense_endpoint,
            create_expense_table, get_all_expenses,
        },
        test_utils::{assert_hx_redirect, assert_valid_html, parse_html_fragment},
    };

    fn get_state() -> CreateExpenseEndpointState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_expense_table(&connection).expect("Could not create expense table");

        CreateExpenseEndpointState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn lunch_form(amount: &str) -> ExpenseForm {
        ExpenseForm {
            date: "2024-01-05".to_owned(),
            category: "food".to_owned(),
            amount: amount.to_owned(),
            description: Some("Lunch".to_owned()),
            payment_method: "cash".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_state();

        let response = create_expense_endpoint(State(state.clone()), Form(lunch_form("12.50"))).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::EXPENSES_VIEW);
        assert_eq!(
            get_all_expenses(&state.db_connection.lock().unwrap()),
            Ok(vec![Expense {
                id: 1,
                date: date!(2024 - 01 - 05),
                category: "food".to_owned(),
                amount: 12.5,
                description: Some("Lunch".to_owned()),
                payment_method: "cash".to_owned(),
            }])
        );
    }

    #[tokio::test]
    async fn malformed_amount_is_rejected_without_writing() {
        let state = get_state();

        let response = create_expense_endpoint(State(state.clone()), Form(lunch_form("abc"))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(
            get_all_expenses(&state.db_connection.lock().unwrap()),
            Ok(vec![])
        );
    }

    #[tokio::test]
    async fn malformed_date_is_rejected_without_writing() {
        let state = get_state();
        let form = ExpenseForm {
            date: "05/01/2024".to_owned(),
            ..lunch_form("12.50")
        };

        let response = create_expense_endpoint(State(state.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_all_expenses(&state.db_connection.lock().unwrap()),
            Ok(vec![])
        );
    }
}
