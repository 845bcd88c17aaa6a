//! Totals over listed records.
//!
//! Both reductions sum in the order the records are given so that a total
//! computed over a store listing is reproducible.

use crate::subscription::Subscription;

/// A record that carries an amount of money.
pub trait MonetaryAmount {
    /// The amount of money in dollars.
    fn amount(&self) -> f64;
}

/// Sum the amounts of `records`.
///
/// An empty slice sums to zero.
pub fn total<T: MonetaryAmount>(records: &[T]) -> f64 {
    records
        .iter()
        .map(MonetaryAmount::amount)
        .fold(0.0, |sum, amount| sum + amount)
}

/// Sum the amounts of the subscriptions that are active.
///
/// Inactive subscriptions are skipped entirely.
pub fn active_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|subscription| subscription.active)
        .map(MonetaryAmount::amount)
        .fold(0.0, |sum, amount| sum + amount)
}
