//! Transaction data aggregation for the summary cards and charts.
//!
//! Provides the overall totals, the running daily totals for a month and the
//! per-category totals for a month. All functions are pure.

use std::collections::HashMap;

use serde::Serialize;

use crate::{month::YearMonth, transaction::Transaction};

/// The overall totals across every transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// The sum of all amounts.
    pub balance: f64,
    /// The sum of all positive amounts.
    pub income: f64,
    /// The sum of all negative amounts, as a positive number.
    pub expense: f64,
}

/// Running totals for each day of a month, indexed from day 1 at index 0.
///
/// Days before the first transaction of the month are zero. A day is `None`
/// only if nothing was ever written for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    pub balance: Vec<Option<f64>>,
    pub income: Vec<Option<f64>>,
    pub expense: Vec<Option<f64>>,
}

/// The total amount moved in one category, regardless of direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Calculates the balance, income and expense totals over all `transactions`.
///
/// Each total is rounded to two decimal places.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;

    for transaction in transactions {
        if transaction.amount > 0.0 {
            income += transaction.amount;
        } else {
            expense += transaction.amount;
        }
    }

    Totals {
        balance: round_to_cents(income + expense),
        income: round_to_cents(income),
        expense: round_to_cents(expense.abs()),
    }
}

/// The transactions in `month` ordered by date.
///
/// The sort is stable, so transactions on the same day keep the order they
/// were added in.
fn transactions_in_month(transactions: &[Transaction], month: YearMonth) -> Vec<&Transaction> {
    let mut in_month: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| month.contains(transaction.calendar_date()))
        .collect();
    in_month.sort_by_key(|transaction| transaction.calendar_date());

    in_month
}

/// Calculates the running net, income and expense totals for each day of `month`.
///
/// Only transactions within `month` count, so the running totals start from
/// zero on the first of the month. When a day has several transactions, the
/// day holds the totals after all of them. A month without transactions is
/// zero for every day.
pub fn compute_daily_series(transactions: &[Transaction], month: YearMonth) -> DailySeries {
    let in_month = transactions_in_month(transactions, month);

    let days = usize::from(month.days());
    let day_index = |transaction: &Transaction| usize::from(transaction.calendar_date().day() - 1);

    let first_day = in_month.first().map_or(days, |transaction| day_index(*transaction));

    let mut series = DailySeries {
        balance: vec![None; days],
        income: vec![None; days],
        expense: vec![None; days],
    };

    for day in 0..first_day {
        series.balance[day] = Some(0.0);
        series.income[day] = Some(0.0);
        series.expense[day] = Some(0.0);
    }

    let mut balance = 0.0;
    let mut income = 0.0;
    let mut expense = 0.0;

    for transaction in in_month {
        balance += transaction.amount;

        if transaction.amount > 0.0 {
            income += transaction.amount;
        } else {
            expense += transaction.amount.abs();
        }

        for day in day_index(transaction)..days {
            series.balance[day] = Some(balance);
            series.income[day] = Some(income);
            series.expense[day] = Some(expense);
        }
    }

    series
}

/// Sums the absolute amounts per category for the transactions in `month`.
///
/// Income and expense categories are mixed together. The result is sorted by
/// total, largest first. Ties keep the order in which each category first
/// appears by transaction date.
pub fn compute_category_breakdown(
    transactions: &[Transaction],
    month: YearMonth,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions_in_month(transactions, month) {
        let index = *index_by_name
            .entry(transaction.category.as_str())
            .or_insert_with(|| {
                totals.push(CategoryTotal {
                    name: transaction.category.clone(),
                    value: 0.0,
                });
                totals.len() - 1
            });

        totals[index].value += transaction.amount.abs();
    }

    totals.sort_by(|a, b| b.value.total_cmp(&a.value));

    totals
}
