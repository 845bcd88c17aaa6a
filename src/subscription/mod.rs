//! Recurring monthly subscriptions that can be paused and resumed.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod form;
mod list;
mod toggle;

pub use create::{create_subscription_endpoint, get_new_subscription_page};
pub use db::{
    create_subscription, create_subscription_table, delete_subscription, get_all_subscriptions,
    get_subscription, toggle_subscription, update_subscription,
};
pub use delete::delete_subscription_endpoint;
pub use domain::{Subscription, SubscriptionFields, SubscriptionForm};
pub use edit::{get_edit_subscription_page, update_subscription_endpoint};
pub use list::{get_subscriptions_json, get_subscriptions_page};
pub use toggle::toggle_subscription_endpoint;
