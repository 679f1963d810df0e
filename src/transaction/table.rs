//! The list of recorded transactions shown under the dashboard charts.

use maud::{Markup, html};
use time::macros::format_description;

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_currency,
    },
    month::YearMonth,
    transaction::Transaction,
};

const AMOUNT_INCOME_STYLE: &str = "text-green-600 dark:text-green-400 font-semibold";
const AMOUNT_EXPENSE_STYLE: &str = "text-red-600 dark:text-red-400 font-semibold";

/// Renders every transaction as a table row, in the order given.
///
/// Each row has a delete button that returns to `selected_month` afterwards.
pub fn transactions_table(transactions: &[&Transaction], selected_month: YearMonth) -> Markup {
    html! {
        section id="transactions" class="w-full"
        {
            h2 class="text-xl font-bold mb-4" { "Transactions" }

            div class="relative overflow-x-auto shadow-md rounded-lg"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class="px-6 py-4 text-right" { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction, selected_month))
                        }

                        @if transactions.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="5" class="px-6 py-4 text-center"
                                {
                                    "No transactions yet. Add one with the form above."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction, selected_month: YearMonth) -> Markup {
    let delete_url = format!(
        "{}?month={}",
        endpoints::format_endpoint(endpoints::TRANSACTION, transaction.id),
        selected_month
    );
    let date_format = format_description!("[day] [month repr:short] [year]");
    let date = transaction
        .calendar_date()
        .format(&date_format)
        .unwrap_or_else(|_| transaction.calendar_date().to_string());
    let amount_style = if transaction.amount < 0.0 {
        AMOUNT_EXPENSE_STYLE
    } else {
        AMOUNT_INCOME_STYLE
    };
    let confirm_message = format!(
        "Are you sure you want to delete '{}'? This cannot be undone.",
        transaction.description
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class="px-6 py-4 whitespace-nowrap" { (date) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
            }
            td class={ "px-6 py-4 text-right whitespace-nowrap " (amount_style) }
            {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
