//! Expense editing page and endpoint.

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
    database_id::ExpenseId,
    endpoints,
    expense::{ExpenseForm, form::expense_form_fields, get_expense, update_expense},
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
};

/// The state needed for the edit expense page and the update endpoint.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the expense editing page, prefilled with the stored expense.
pub async fn get_edit_expense_page(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<EditExpenseState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let expense = get_expense(expense_id, &connection).inspect_err(|error| match error {
        Error::NotFound => tracing::debug!("expense {expense_id} not found"),
        _ => tracing::error!("Failed to retrieve expense {expense_id}: {error}"),
    })?;

    Ok(edit_expense_view(expense_id, &ExpenseForm::from(&expense)).into_response())
}

/// Handle expense update form submission.
///
/// Every field is overwritten. Malformed input is rejected with an alert and
/// the stored expense is left as it was.
pub async fn update_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<EditExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let fields = match form.parse() {
        Ok(fields) => fields,
        Err(error) => {
            tracing::debug!("rejected update to expense {expense_id}: {error}");
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

    match update_expense(expense_id, fields, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(Error::UpdateMissingExpense) => Error::UpdateMissingExpense.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating expense {expense_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

fn edit_expense_view(expense_id: ExpenseId, values: &ExpenseForm) -> Markup {
    let edit_endpoint = endpoints::format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense_id);
    let update_endpoint = endpoints::format_endpoint(endpoints::EXPENSE, expense_id);
    let nav_bar = NavBar::new(&edit_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Edit Expense" }

            form
                hx-put=(update_endpoint)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                (expense_form_fields(values))

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
            }
        }
    };

    base("Edit Expense", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod edit_expense_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        endpoints,
        expense::{
            ExpenseFields, create_expense, create_expense_table, edit::EditExpenseState,
            get_edit_expense_page,
        },
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text, assert_hx_endpoint,
            assert_status_ok, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    fn get_state() -> EditExpenseState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_expense_table(&connection).expect("Could not create expense table");

        EditExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn render_page_with_stored_values() {
        let state = get_state();
        let expense = create_expense(
            ExpenseFields {
                date: date!(2024 - 01 - 05),
                category: "food".to_owned(),
                amount: 12.5,
                description: None,
                payment_method: "cash".to_owned(),
            },
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();

        let response = get_edit_expense_page(Path(expense.id), State(state))
            .await
            .into_response();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &endpoints::format_endpoint(endpoints::EXPENSE, expense.id),
            "hx-put",
        );
        assert_form_input_with_value(&form, "date", "date", "2024-01-05");
        assert_form_input_with_value(&form, "amount", "number", "12.50");
        assert_form_input_with_value(&form, "category", "text", "food");
        assert_form_input_with_value(&form, "payment_method", "text", "cash");
        assert_form_submit_button_with_text(&form, "Save Changes");
    }

    #[tokio::test]
    async fn missing_expense_is_not_found() {
        let state = get_state();

        let response = get_edit_expense_page(Path(42), State(state))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod update_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        endpoints,
        expense::{
            Expense, ExpenseFields, ExpenseForm, create_expense, create_expense_table,
            edit::EditExpenseState, get_expense, update_expense_endpoint,
        },
        test_utils::assert_hx_redirect,
    };

    fn get_state_with_expense() -> (EditExpenseState, Expense) {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_expense_table(&connection).expect("Could not create expense table");
        let expense = create_expense(
            ExpenseFields {
                date: date!(2024 - 01 - 05),
                category: "food".to_owned(),
                amount: 12.5,
                description: None,
                payment_method: "cash".to_owned(),
            },
            &connection,
        )
        .unwrap();

        let state = EditExpenseState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        (state, expense)
    }

    fn form(amount: &str) -> ExpenseForm {
        ExpenseForm {
            date: "2024-01-10".to_owned(),
            category: "transport".to_owned(),
            amount: amount.to_owned(),
            description: Some("Bus".to_owned()),
            payment_method: "card".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_update_expense() {
        let (state, expense) = get_state_with_expense();

        let response =
            update_expense_endpoint(Path(expense.id), State(state.clone()), Form(form("30")))
                .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::EXPENSES_VIEW);
        assert_eq!(
            get_expense(expense.id, &state.db_connection.lock().unwrap()),
            Ok(Expense {
                id: expense.id,
                date: date!(2024 - 01 - 10),
                category: "transport".to_owned(),
                amount: 30.0,
                description: Some("Bus".to_owned()),
                payment_method: "card".to_owned(),
            })
        );
    }

    #[tokio::test]
    async fn malformed_amount_leaves_expense_unchanged() {
        let (state, expense) = get_state_with_expense();

        let response =
            update_expense_endpoint(Path(expense.id), State(state.clone()), Form(form("abc")))
                .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_expense(expense.id, &state.db_connection.lock().unwrap()),
            Ok(expense)
        );
    }

    #[tokio::test]
    async fn missing_expense_is_not_found() {
        let (state, expense) = get_state_with_expense();

        let response =
            update_expense_endpoint(Path(expense.id + 1), State(state), Form(form("30"))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
