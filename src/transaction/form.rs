use maud::{Markup, html};
use time::Date;

use crate::{
    category::{CategoryRegistry, TransactionKind, category_options},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    month::YearMonth,
};

/// The values the transaction form starts with.
pub struct TransactionFormDefaults {
    pub kind: TransactionKind,
    pub date: Date,
    /// The month shown on the dashboard, so it can be shown again after submitting.
    pub selected_month: YearMonth,
}

/// The form for entering a new transaction.
///
/// Switching the kind reloads the category options for that kind.
pub fn transaction_form(defaults: &TransactionFormDefaults, categories: &CategoryRegistry) -> Markup {
    let create_transaction_endpoint = endpoints::TRANSACTIONS_API;
    let category_options_endpoint = endpoints::CATEGORY_OPTIONS;

    html! {
        form
            hx-post=(create_transaction_endpoint)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            input type="hidden" name="month" value=(defaults.selected_month);

            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Transaction type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for kind in [TransactionKind::Expense, TransactionKind::Income] {
                        @let id = format!("transaction-kind-{kind}");

                        div class="flex items-center gap-3"
                        {
                            input
                                name="kind"
                                id=(id)
                                type="radio"
                                value=(kind)
                                checked[kind == defaults.kind]
                                required
                                hx-get=(category_options_endpoint)
                                hx-target="#category"
                                hx-trigger="change"
                                class=(FORM_RADIO_INPUT_STYLE);

                            label for=(id) class=(FORM_RADIO_LABEL_STYLE)
                            {
                                @match kind {
                                    TransactionKind::Expense => { "Expense" }
                                    TransactionKind::Income => { "Income" }
                                }
                            }
                        }
                    }
                }
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.01"
                        min="0.01"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (category_options(categories, defaults.kind))
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}
