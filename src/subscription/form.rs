use maud::{Markup, html};

use crate::{
    html::{FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    input::{MAX_BILLING_DAY, MIN_BILLING_DAY},
    subscription::SubscriptionForm,
};

/// The inputs shared by the new and edit subscription forms, prefilled from
/// `values`.
pub fn subscription_form_fields(values: &SubscriptionForm) -> Markup {
    let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_owned());

    let name = non_empty(&values.name);
    let amount = non_empty(&values.amount);
    let billing_day = non_empty(&values.billing_day);
    let category = non_empty(&values.category);
    let payment_method = non_empty(&values.payment_method);

    html! {
        div
        {
            label for="name" class=(FORM_LABEL_STYLE) { "Name" }

            input
                name="name"
                id="name"
                type="text"
                placeholder="e.g. Netflix"
                value=[name]
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Monthly amount" }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    value=[amount]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label for="billing_day" class=(FORM_LABEL_STYLE) { "Billing day" }

            input
                name="billing_day"
                id="billing_day"
                type="number"
                min=(MIN_BILLING_DAY)
                max=(MAX_BILLING_DAY)
                step="1"
                value=[billing_day]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            input
                name="category"
                id="category"
                type="text"
                placeholder="e.g. entertainment"
                value=[category]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="payment_method" class=(FORM_LABEL_STYLE) { "Payment method" }

            input
                name="payment_method"
                id="payment_method"
                type="text"
                placeholder="e.g. card"
                value=[payment_method]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div class="flex items-center gap-3"
        {
            input
                name="active"
                id="active"
                type="checkbox"
                checked[values.active.is_some()]
                class=(FORM_CHECKBOX_STYLE);

            label for="active" class="text-sm font-medium text-gray-900 dark:text-white"
            {
                "Active"
            }
        }
    }
}
