//! Database operations for subscriptions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::SubscriptionId,
    subscription::{Subscription, SubscriptionFields},
};

/// Create a subscription and return it with its generated ID.
pub fn create_subscription(
    fields: SubscriptionFields,
    connection: &Connection,
) -> Result<Subscription, Error> {
    connection
        .prepare(
            "INSERT INTO subscriptions (name, amount, billing_day, category, payment_method, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, name, amount, billing_day, category, payment_method, active",
        )?
        .query_row(
            (
                fields.name,
                fields.amount,
                fields.billing_day,
                fields.category,
                fields.payment_method,
                fields.active,
            ),
            map_row,
        )
        .map_err(Error::from)
}

/// Retrieve a single subscription by ID.
///
/// # Errors
/// Returns [Error::NotFound] if there is no subscription with the ID `subscription_id`.
pub fn get_subscription(
    subscription_id: SubscriptionId,
    connection: &Connection,
) -> Result<Subscription, Error> {
    connection
        .prepare(
            "SELECT id, name, amount, billing_day, category, payment_method, active
             FROM subscriptions WHERE id = :id;",
        )?
        .query_row(&[(":id", &subscription_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all subscriptions in alphabetical order of name.
pub fn get_all_subscriptions(connection: &Connection) -> Result<Vec<Subscription>, Error> {
    connection
        .prepare(
            "SELECT id, name, amount, billing_day, category, payment_method, active
             FROM subscriptions ORDER BY name ASC, id ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_subscription| maybe_subscription.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every field of a subscription except its ID.
///
/// # Errors
/// Returns [Error::UpdateMissingSubscription] if the subscription doesn't exist.
pub fn update_subscription(
    subscription_id: SubscriptionId,
    fields: SubscriptionFields,
    connection: &Connection,
) -> Result<Subscription, Error> {
    let rows_affected = connection.execute(
        "UPDATE subscriptions
         SET name = ?1, amount = ?2, billing_day = ?3, category = ?4, payment_method = ?5,
             active = ?6
         WHERE id = ?7",
        (
            &fields.name,
            fields.amount,
            fields.billing_day,
            &fields.category,
            &fields.payment_method,
            fields.active,
            subscription_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingSubscription);
    }

    Ok(Subscription {
        id: subscription_id,
        name: fields.name,
        amount: fields.amount,
        billing_day: fields.billing_day,
        category: fields.category,
        payment_method: fields.payment_method,
        active: fields.active,
    })
}

/// Flip whether a subscription is active.
///
/// Toggling a subscription that does not exist changes nothing and is not an
/// error.
pub fn toggle_subscription(
    subscription_id: SubscriptionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE subscriptions SET active = NOT active WHERE id = ?1",
        [subscription_id],
    )?;

    if rows_affected == 0 {
        tracing::debug!("tried to toggle missing subscription {subscription_id}");
    }

    Ok(())
}

/// Delete a subscription by ID.
///
/// Deleting a subscription that does not exist is not an error.
pub fn delete_subscription(
    subscription_id: SubscriptionId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM subscriptions WHERE id = ?1", [subscription_id])?;

    if rows_affected == 0 {
        tracing::debug!("subscription {subscription_id} was already deleted");
    }

    Ok(())
}

/// Initialize the subscription table.
///
/// Rows inserted without an `active` value start out active.
pub fn create_subscription_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS subscriptions (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            billing_day INTEGER NOT NULL CHECK (billing_day BETWEEN 1 AND 31),
            category TEXT NOT NULL,
            payment_method TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Subscription, rusqlite::Error> {
    Ok(Subscription {
        id: row.get(0)?,
        name: row.get(1)?,
        amount: row.get(2)?,
        billing_day: row.get(3)?,
        category: row.get(4)?,
        payment_method: row.get(5)?,
        active: row.get(6)?,
    })
}
