//! Summary cards for the totals over every transaction.

use maud::{Markup, html};

use crate::{dashboard::aggregation::Totals, html::format_currency};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";

/// Renders the balance, income and expense totals side by side.
pub(super) fn totals_cards_view(totals: &Totals) -> Markup {
    html! {
        section id="totals" class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                (total_card("balance", "Total Balance", totals.balance, "text-emerald-600 dark:text-emerald-400"))
                (total_card("income", "Total Income", totals.income, "text-blue-600 dark:text-blue-400"))
                (total_card("expense", "Total Expense", totals.expense, "text-red-600 dark:text-red-400"))
            }
        }
    }
}

fn total_card(id: &str, title: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div id={ (id) "-card" } class=(CARD_STYLE) aria-label=(format!("{title}: {}", format_currency(amount)))
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400 mb-1" { (title) }

            div class={ "text-3xl font-bold " (amount_style) }
            {
                (format_currency(amount))
            }
        }
    }
}
