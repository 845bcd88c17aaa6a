use maud::{Markup, html};

use crate::{
    expense::ExpenseForm,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The inputs shared by the new and edit expense forms, prefilled from `values`.
///
/// Empty strings are rendered as inputs without a value.
pub fn expense_form_fields(values: &ExpenseForm) -> Markup {
    let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_owned());

    let date = non_empty(&values.date);
    let amount = non_empty(&values.amount);
    let category = non_empty(&values.category);
    let payment_method = non_empty(&values.payment_method);
    let description = values.description.as_deref().and_then(non_empty);

    html! {
        div
        {
            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

            input
                name="date"
                id="date"
                type="date"
                value=[date]
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

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
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label for="category" class=(FORM_LABEL_STYLE) { "Category" }

            input
                name="category"
                id="category"
                type="text"
                placeholder="e.g. groceries"
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

        div
        {
            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

            input
                name="description"
                id="description"
                type="text"
                placeholder="Optional"
                value=[description]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
