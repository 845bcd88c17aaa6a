//! Database operations for expenses.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{Expense, ExpenseFields},
};

/// Create an expense and return it with its generated ID.
pub fn create_expense(fields: ExpenseFields, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare(
            "INSERT INTO expenses (date, category, amount, description, payment_method)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, date, category, amount, description, payment_method",
        )?
        .query_row(
            (
                fields.date,
                fields.category,
                fields.amount,
                fields.description,
                fields.payment_method,
            ),
            map_row,
        )
        .map_err(Error::from)
}

/// Retrieve a single expense by ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no expense with the ID `expense_id`.
pub fn get_expense(expense_id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare(
            "SELECT id, date, category, amount, description, payment_method
             FROM expenses WHERE id = :id;",
        )?
        .query_row(&[(":id", &expense_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all expenses, most recent first.
///
/// Expenses on the same date are listed in the order they were created.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, date, category, amount, description, payment_method
             FROM expenses ORDER BY date DESC, id ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every field of an expense except its ID.
///
/// # Errors
/// Returns [Error::UpdateMissingExpense] if the expense doesn't exist.
pub fn update_expense(
    expense_id: ExpenseId,
    fields: ExpenseFields,
    connection: &Connection,
) -> Result<Expense, Error> {
    let rows_affected = connection.execute(
        "UPDATE expenses
         SET date = ?1, category = ?2, amount = ?3, description = ?4, payment_method = ?5
         WHERE id = ?6",
        (
            fields.date,
            &fields.category,
            fields.amount,
            &fields.description,
            &fields.payment_method,
            expense_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingExpense);
    }

    Ok(Expense {
        id: expense_id,
        date: fields.date,
        category: fields.category,
        amount: fields.amount,
        description: fields.description,
        payment_method: fields.payment_method,
    })
}

/// Delete an expense by ID.
///
/// Deleting an expense that does not exist is not an error, the database is
/// left unchanged.
pub fn delete_expense(expense_id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expenses WHERE id = ?1", [expense_id])?;

    if rows_affected == 0 {
        tracing::debug!("expense {expense_id} was already deleted");
    }

    Ok(())
}

/// Initialize the expense table and indexes.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY,
            date TEXT NOT NULL,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            description TEXT,
            payment_method TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        date: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        payment_method: row.get(5)?,
    })
}
