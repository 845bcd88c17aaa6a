//! Expense tracking: dated, one-off spending records.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod form;
mod list;

pub use create::{create_expense_endpoint, get_new_expense_page};
pub use db::{
    create_expense, create_expense_table, delete_expense, get_all_expenses, get_expense,
    update_expense,
};
pub use delete::delete_expense_endpoint;
pub use domain::{Expense, ExpenseFields, ExpenseForm};
pub use edit::{get_edit_expense_page, update_expense_endpoint};
pub use list::{get_expenses_json, get_expenses_page};
