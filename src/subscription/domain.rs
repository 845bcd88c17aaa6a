//! Core subscription domain types.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    aggregate::MonetaryAmount,
    database_id::SubscriptionId,
    input::{parse_amount, parse_billing_day},
};

/// A recurring monthly charge, e.g. a streaming service.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    /// The ID of the subscription, assigned by the database.
    pub id: SubscriptionId,
    /// The name of the service being paid for.
    pub name: String,
    /// How much is charged each month, in dollars.
    pub amount: f64,
    /// The day of the month the charge is made, from 1 to 31.
    pub billing_day: u8,
    /// What kind of spending this is, e.g. "entertainment".
    pub category: String,
    /// How the subscription is paid, e.g. "card".
    pub payment_method: String,
    /// Whether the subscription counts toward the recurring total.
    pub active: bool,
}

impl MonetaryAmount for Subscription {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// The fields of a subscription that can be set on creation and overwritten
/// on update.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionFields {
    /// See [Subscription::name].
    pub name: String,
    /// See [Subscription::amount].
    pub amount: f64,
    /// See [Subscription::billing_day].
    pub billing_day: u8,
    /// See [Subscription::category].
    pub category: String,
    /// See [Subscription::payment_method].
    pub payment_method: String,
    /// See [Subscription::active].
    pub active: bool,
}

/// Form data for subscription creation and editing.
///
/// `active` follows checkbox semantics: browsers only send the field when
/// the box is ticked, so any value means active and a missing field means
/// inactive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionForm {
    /// The name of the service.
    pub name: String,
    /// The monthly amount as decimal text, e.g. "9.99".
    pub amount: String,
    /// The day of the month as text, e.g. "15".
    pub billing_day: String,
    /// The category, stored as given.
    pub category: String,
    /// The payment method, stored as given.
    pub payment_method: String,
    /// Present when the active checkbox is ticked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

impl SubscriptionForm {
    /// Parse the raw form text into subscription fields.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] or [Error::InvalidBillingDay] if the
    /// amount or the billing day are malformed.
    pub fn parse(&self) -> Result<SubscriptionFields, Error> {
        Ok(SubscriptionFields {
            name: self.name.clone(),
            amount: parse_amount(&self.amount)?,
            billing_day: parse_billing_day(&self.billing_day)?,
            category: self.category.clone(),
            payment_method: self.payment_method.clone(),
            active: self.active.is_some(),
        })
    }
}

impl From<&Subscription> for SubscriptionForm {
    fn from(subscription: &Subscription) -> Self {
        Self {
            name: subscription.name.clone(),
            amount: format!("{:.2}", subscription.amount),
            billing_day: subscription.billing_day.to_string(),
            category: subscription.category.clone(),
            payment_method: subscription.payment_method.clone(),
            active: subscription.active.then(|| "on".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        subscription::{SubscriptionFields, SubscriptionForm},
    };

    fn form(amount: &str, billing_day: &str, active: Option<&str>) -> SubscriptionForm {
        SubscriptionForm {
            name: "X".to_owned(),
            amount: amount.to_owned(),
            billing_day: billing_day.to_owned(),
            category: "entertainment".to_owned(),
            payment_method: "card".to_owned(),
            active: active.map(str::to_owned),
        }
    }

    #[test]
    fn missing_active_field_means_inactive() {
        let got = form("9.99", "15", None).parse();

        assert_eq!(
            got,
            Ok(SubscriptionFields {
                name: "X".to_owned(),
                amount: 9.99,
                billing_day: 15,
                category: "entertainment".to_owned(),
                payment_method: "card".to_owned(),
                active: false,
            })
        );
    }

    #[test]
    fn any_active_value_means_active() {
        for value in ["on", "true", ""] {
            let got = form("9.99", "15", Some(value)).parse().map(|fields| fields.active);

            assert_eq!(got, Ok(true), "want {value:?} to mean active");
        }
    }

    #[test]
    fn malformed_amount_is_a_parse_error() {
        let got = form("nine", "15", None).parse();

        assert_eq!(got, Err(Error::InvalidAmount("nine".to_owned())));
    }

    #[test]
    fn out_of_range_billing_day_is_a_parse_error() {
        let got = form("9.99", "32", Some("on")).parse();

        assert_eq!(got, Err(Error::InvalidBillingDay("32".to_owned())));
    }

    #[test]
    fn deserializes_form_without_active_field() {
        let got: SubscriptionForm = serde_json::from_value(serde_json::json!({
            "name": "X",
            "amount": "9.99",
            "billing_day": "15",
            "category": "entertainment",
            "payment_method": "card",
        }))
        .unwrap();

        assert_eq!(got.active, None);
    }
}
