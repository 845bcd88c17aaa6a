//! Expense listing page and JSON endpoint.

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
    aggregate::total,
    database_id::ExpenseId,
    endpoints,
    expense::{Expense, get_all_expenses},
    html::{
        BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, edit_delete_action_links, format_currency,
    },
    input::format_date,
    navigation::NavBar,
};

/// The state needed for listing expenses.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// An expense as it appears in the JSON listing.
#[derive(Debug, Serialize)]
struct ExpenseJson {
    id: ExpenseId,
    date: String,
    category: String,
    amount: f64,
    description: Option<String>,
    payment_method: String,
}

impl From<Expense> for ExpenseJson {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            date: format_date(expense.date),
            category: expense.category,
            amount: expense.amount,
            description: expense.description,
            payment_method: expense.payment_method,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExpenseListJson {
    expenses: Vec<ExpenseJson>,
    total: f64,
}

fn load_expenses(state: &ExpensesPageState) -> Result<Vec<Expense>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    get_all_expenses(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve expenses: {error}"))
}

/// Render the expenses page, most recent first, with the total of all amounts.
pub async fn get_expenses_page(State(state): State<ExpensesPageState>) -> Result<Response, Error> {
    let expenses = load_expenses(&state)?;

    Ok(expenses_view(&expenses).into_response())
}

/// List every expense and the total as JSON.
pub async fn get_expenses_json(State(state): State<ExpensesPageState>) -> Response {
    let expenses = match load_expenses(&state) {
        Ok(expenses) => expenses,
        Err(error) => return error.into_alert_response(),
    };

    let total = total(&expenses);
    let body = ExpenseListJson {
        expenses: expenses.into_iter().map(ExpenseJson::from).collect(),
        total,
    };

    (StatusCode::OK, Json(body)).into_response()
}

fn expenses_view(expenses: &[Expense]) -> Markup {
    let new_expense_route = endpoints::NEW_EXPENSE_VIEW;
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();
    let total = total(expenses);

    let table_row = |expense: &Expense| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id);
        let delete_url = endpoints::format_endpoint(endpoints::EXPENSE, expense.id);
        let confirm_message = format!(
            "Are you sure you want to delete the {} expense from {}?",
            format_currency(expense.amount),
            format_date(expense.date)
        );

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (format_date(expense.date)) }
                td class=(TABLE_CELL_STYLE)
                {
                    span class=(BADGE_STYLE) { (expense.category) }
                }
                td class=(TABLE_CELL_STYLE) { (expense.description.as_deref().unwrap_or("")) }
                td class=(TABLE_CELL_STYLE) { (expense.payment_method) }
                td class="px-6 py-4 text-right" { (format_currency(expense.amount)) }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
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
                    h1 class="text-xl font-bold" { "Expenses" }

                    a href=(new_expense_route) class=(LINK_STYLE) { "Add Expense" }
                }

                p id="expenses-total" class="text-lg"
                {
                    "Total: "
                    span class="font-semibold" { (format_currency(total)) }
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
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Payment method" }
                                th scope="col" class="px-6 py-4 text-right" { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for expense in expenses {
                                (table_row(expense))
                            }

                            @if expenses.is_empty() {
                                tr
                                {
                                    td
                                        colspan="6"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No expenses recorded yet. "
                                        a href=(new_expense_route) class=(LINK_STYLE)
                                        {
                                            "Add your first expense"
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

    base("Expenses", &[], &content)
}


#[cfg(test)]
mod expenses_json_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use time::macros::date;

    use crate::expense::{ExpenseFields, create_expense, create_expense_table, get_expenses_json};

    use super::ExpensesPageState;

    #[tokio::test]
    async fn lists_expenses_as_json() {
        let connection = Connection::open_in_memory().unwrap();
        create_expense_table(&connection).unwrap();
        create_expense(
            ExpenseFields {
                date: date!(2024 - 01 - 05),
                category: "food".to_owned(),
                amount: 12.5,
                description: Some("Lunch".to_owned()),
                payment_method: "cash".to_owned(),
            },
            &connection,
        )
        .unwrap();
        let state = ExpensesPageState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = get_expenses_json(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let got: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            got,
            json!({
                "expenses": [{
                    "id": 1,
                    "date": "2024-01-05",
                    "category": "food",
                    "amount": 12.5,
                    "description": "Lunch",
                    "payment_method": "cash",
                }],
                "total": 12.5,
            })
        );
    }
}
