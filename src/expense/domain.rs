//! Core expense domain types.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    aggregate::MonetaryAmount,
    database_id::ExpenseId,
    input::{format_date, optional_text, parse_amount, parse_date},
};

/// A single dated expenditure, e.g. lunch paid with cash.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense, assigned by the database.
    pub id: ExpenseId,
    /// When the money was spent.
    pub date: Date,
    /// What kind of spending this was, e.g. "food" or "transport".
    pub category: String,
    /// How much was spent, in dollars.
    pub amount: f64,
    /// Optional free text about the expense.
    pub description: Option<String>,
    /// How the expense was paid, e.g. "cash" or "card".
    pub payment_method: String,
}

impl MonetaryAmount for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// The fields of an expense that can be set on creation and overwritten on
/// update, i.e. everything except the ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    /// See [Expense::date].
    pub date: Date,
    /// See [Expense::category].
    pub category: String,
    /// See [Expense::amount].
    pub amount: f64,
    /// See [Expense::description].
    pub description: Option<String>,
    /// See [Expense::payment_method].
    pub payment_method: String,
}

/// Form data for expense creation and editing, as submitted by the browser.
///
/// The amount and date are kept as raw text and only become typed values via
/// [ExpenseForm::parse].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The date as `YYYY-MM-DD`.
    pub date: String,
    /// The category, stored as given.
    pub category: String,
    /// The amount as decimal text, e.g. "12.50".
    pub amount: String,
    /// Optional description, blank text counts as no description.
    #[serde(default)]
    pub description: Option<String>,
    /// The payment method, stored as given.
    pub payment_method: String,
}

impl ExpenseForm {
    /// Parse the raw form text into expense fields.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] or [Error::InvalidAmount] if the date or
    /// the amount are malformed.
    pub fn parse(&self) -> Result<ExpenseFields, Error> {
        Ok(ExpenseFields {
            date: parse_date(&self.date)?,
            category: self.category.clone(),
            amount: parse_amount(&self.amount)?,
            description: optional_text(self.description.as_deref()),
            payment_method: self.payment_method.clone(),
        })
    }
}

impl From<&Expense> for ExpenseForm {
    fn from(expense: &Expense) -> Self {
        Self {
            date: format_date(expense.date),
            category: expense.category.clone(),
            amount: format!("{:.2}", expense.amount),
            description: expense.description.clone(),
            payment_method: expense.payment_method.clone(),
        }
    }
}
