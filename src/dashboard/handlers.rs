//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the dashboard page and the JSON summary of a month
//! - HTML view functions for rendering the dashboard UI
//! - State and query types used by the handlers

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::{Date, UtcOffset};

use crate::{
    AppState, Error,
    app_state::lock_session,
    category::TransactionKind,
    dashboard::{
        aggregation::{
            CategoryTotal, DailySeries, Totals, compute_category_breakdown, compute_daily_series,
            compute_totals,
        },
        cards::totals_cards_view,
        charts::{DashboardChart, category_chart, charts_script, charts_view, trend_chart},
    },
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, base, currency_input_styles},
    month::{YearMonth, selectable_months},
    navigation::NavBar,
    session::Session,
    timezone::{get_local_offset, local_today},
    transaction::{Transaction, TransactionFormDefaults, transaction_form, transactions_table},
};

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard page.
///
/// Contains the session and timezone information required
/// by dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The session holding the transactions and categories.
    pub session: Arc<Mutex<Session>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The month to show, formatted as `YYYY-MM`.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

/// The aggregated data for one month, as served by the summary API.
#[derive(Debug, Serialize)]
pub struct MonthSummary {
    month: YearMonth,
    totals: Totals,
    series: DailySeries,
    categories: Vec<CategoryTotal>,
}

/// Display a page with an overview of the user's finances for a month.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<MonthQuery>,
) -> Result<Response, Error> {
    let local_offset = local_offset(&state.local_timezone)?;
    let today = local_today(local_offset);
    let selected_month = resolve_month(query.month.as_deref(), local_offset);

    let session = lock_session(&state.session)?;
    let transactions = session.transactions();

    let months = selectable_months(
        transactions
            .as_slice()
            .iter()
            .map(|transaction| transaction.calendar_date()),
        YearMonth::from_date(today),
    );
    let totals = compute_totals(transactions.as_slice());
    let charts = build_dashboard_charts(transactions.as_slice(), selected_month);

    let form_defaults = TransactionFormDefaults {
        kind: TransactionKind::Expense,
        date: default_form_date(selected_month, today),
        selected_month,
    };

    let content = html!(
        (totals_cards_view(&totals))
        (month_selector(&months, selected_month))
        (charts_view(&charts))

        div class="grid grid-cols-1 lg:grid-cols-3 gap-4 w-full"
        {
            section
                id="transaction-form-container"
                class="lg:col-span-1 bg-white dark:bg-gray-800 rounded-lg shadow-md p-4"
            {
                h2 class="text-xl font-bold mb-4" { "Add Transaction" }
                (transaction_form(&form_defaults, session.categories()))
            }

            div class="lg:col-span-2"
            {
                (transactions_table(&transactions.newest_first(), selected_month))
            }
        }
    );

    Ok(dashboard_view(NavBar::new(endpoints::DASHBOARD_VIEW), &charts, &content).into_response())
}

/// The totals, daily series and category breakdown of a month as JSON.
///
/// Days before the first transaction of the month are zero and every later
/// day carries the running totals forward.
pub async fn get_summary(
    State(state): State<DashboardState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthSummary>, Error> {
    let local_offset = local_offset(&state.local_timezone)?;
    let month = resolve_month(query.month.as_deref(), local_offset);

    let session = lock_session(&state.session)?;
    let transactions = session.transactions().as_slice();

    Ok(Json(MonthSummary {
        month,
        totals: compute_totals(transactions),
        series: compute_daily_series(transactions, month),
        categories: compute_category_breakdown(transactions, month),
    }))
}

fn local_offset(local_timezone: &str) -> Result<UtcOffset, Error> {
    get_local_offset(local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {local_timezone}");
        Error::InvalidTimezoneError(local_timezone.to_owned())
    })
}

/// Parse the requested month, falling back to the current month.
fn resolve_month(month: Option<&str>, local_offset: UtcOffset) -> YearMonth {
    let current_month = YearMonth::current(local_offset);

    match month {
        None => current_month,
        Some(text) => text.parse().unwrap_or_else(|error| {
            tracing::warn!("invalid month {text:?}, showing {current_month}: {error}");
            current_month
        }),
    }
}

/// Today when it is in `selected_month`, otherwise the first of `selected_month`.
fn default_form_date(selected_month: YearMonth, today: Date) -> Date {
    if selected_month.contains(today) {
        return today;
    }

    Date::from_calendar_date(selected_month.year(), selected_month.month(), 1).unwrap_or(today)
}

fn build_dashboard_charts(
    transactions: &[Transaction],
    month: YearMonth,
) -> [DashboardChart; 2] {
    let series = compute_daily_series(transactions, month);
    let breakdown = compute_category_breakdown(transactions, month);

    [
        DashboardChart {
            id: "trend-chart",
            options: trend_chart(&series, month).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(&breakdown, month).to_string(),
        },
    ]
}

fn month_selector(months: &[YearMonth], selected_month: YearMonth) -> Markup {
    let dashboard_endpoint = endpoints::DASHBOARD_VIEW;

    html! {
        form
            method="get"
            action=(dashboard_endpoint)
            class="w-full mb-4 flex items-center gap-3"
        {
            label for="month-select" class=(FORM_LABEL_STYLE) { "Month" }

            select
                id="month-select"
                name="month"
                onchange="this.form.submit()"
                class={ "max-w-xs " (FORM_TEXT_INPUT_STYLE) }
            {
                @for month in months {
                    option value=(month) selected[*month == selected_month] { (month.label()) }
                }
            }

            button
                type="submit"
                class="px-3 py-2 rounded bg-blue-500 text-white text-sm hover:bg-blue-600"
            {
                "Show"
            }
        }
    }
}

fn dashboard_view(nav_bar: NavBar, charts: &[DashboardChart], content: &Markup) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (content)
        }
    );

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
        charts_script(charts),
        currency_input_styles(),
    ];

    base("Dashboard", &head_elements, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::{Month, OffsetDateTime, UtcOffset, macros::datetime};

    use crate::{
        category::TransactionKind,
        dashboard::handlers::{DashboardState, MonthQuery, default_form_date, resolve_month},
        month::YearMonth,
        session::Session,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document, response_text},
        transaction::NewTransaction,
    };

    use super::{get_dashboard_page, get_summary};

    fn get_state() -> DashboardState {
        let mut session = Session::open(Connection::open_in_memory().unwrap()).unwrap();
        session
            .add_transaction(NewTransaction {
                description: "Pay".to_owned(),
                amount: 100.0,
                kind: TransactionKind::Income,
                category: "Salary".to_owned(),
                date: datetime!(2024-02-01 0:00 UTC),
            })
            .unwrap();
        session
            .add_transaction(NewTransaction {
                description: "Groceries".to_owned(),
                amount: 30.0,
                kind: TransactionKind::Expense,
                category: "Food".to_owned(),
                date: datetime!(2024-02-05 0:00 UTC),
            })
            .unwrap();

        DashboardState {
            session: Arc::new(Mutex::new(session)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn month_query(month: &str) -> Query<MonthQuery> {
        Query(MonthQuery {
            month: Some(month.to_owned()),
        })
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let response = get_dashboard_page(State(get_state()), month_query("2024-02"))
            .await
            .unwrap();

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_element_exists(&html, "#trend-chart");
        assert_element_exists(&html, "#category-chart");
        assert_element_exists(&html, "#balance-card");
        assert_element_exists(&html, "form[hx-post='/api/transactions']");
        assert_element_exists(&html, "table");

        let rows = Selector::parse("tbody tr[data-transaction-id]").unwrap();
        assert_eq!(html.select(&rows).count(), 2);
    }

    #[tokio::test]
    async fn month_selector_lists_transaction_months_and_current_month() {
        let response = get_dashboard_page(State(get_state()), month_query("2024-02"))
            .await
            .unwrap();
        let html = parse_html_document(response).await;

        let options = Selector::parse("select#month-select option").unwrap();
        let values: Vec<&str> = html
            .select(&options)
            .filter_map(|option| option.value().attr("value"))
            .collect();
        let current_month = YearMonth::from_date(OffsetDateTime::now_utc().date()).to_string();
        assert_eq!(values, vec![current_month.as_str(), "2024-02"]);

        let selected = Selector::parse("select#month-select option[selected]").unwrap();
        let selected = html.select(&selected).next().expect("No selected month");
        assert_eq!(selected.value().attr("value"), Some("2024-02"));
        assert_eq!(selected.text().collect::<String>(), "February 2024");
    }

    #[tokio::test]
    async fn invalid_timezone_is_an_error() {
        let state = DashboardState {
            local_timezone: "Not/AZone".to_owned(),
            ..get_state()
        };

        let result = get_dashboard_page(State(state), Query(MonthQuery::default())).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn summary_has_month_totals_series_and_categories() {
        let response = get_summary(State(get_state()), month_query("2024-02"))
            .await
            .unwrap()
            .into_response();

        assert_status_ok(&response);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(summary["month"], "2024-02");
        assert_eq!(summary["totals"]["balance"], 70.0);
        assert_eq!(summary["totals"]["income"], 100.0);
        assert_eq!(summary["totals"]["expense"], 30.0);

        let balance = summary["series"]["balance"].as_array().unwrap();
        assert_eq!(balance.len(), 29);
        assert_eq!(balance[3], 100.0);
        assert_eq!(balance[4], 70.0);
        assert_eq!(balance[28], 70.0);

        assert_eq!(
            summary["categories"],
            serde_json::json!([
                { "name": "Salary", "value": 100.0 },
                { "name": "Food", "value": 30.0 },
            ])
        );
    }

    #[tokio::test]
    async fn summary_of_empty_month_is_zero() {
        let response = get_summary(State(get_state()), month_query("2023-04"))
            .await
            .unwrap()
            .into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let summary: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let expense = summary["series"]["expense"].as_array().unwrap();
        assert_eq!(expense.len(), 30);
        assert!(expense.iter().all(|value| *value == 0.0));
        assert_eq!(summary["categories"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn category_names_cannot_break_out_of_the_chart_script() {
        let payload = "</script><script>alert(1)</script>";
        let state = get_state();
        {
            let mut session = state.session.lock().unwrap();
            session.add_category(TransactionKind::Expense, payload).unwrap();
            session
                .add_transaction(NewTransaction {
                    description: "Mystery".to_owned(),
                    amount: 5.0,
                    kind: TransactionKind::Expense,
                    category: payload.to_owned(),
                    date: datetime!(2024-02-10 0:00 UTC),
                })
                .unwrap();
        }

        let response = get_dashboard_page(State(state), month_query("2024-02"))
            .await
            .unwrap();

        assert_status_ok(&response);
        let body = response_text(response).await;
        assert!(!body.contains(payload));
        assert!(body.contains(r"<\/script><script>alert(1)<\/script>"));
    }

    #[test]
    fn malformed_month_falls_back_to_current_month() {
        let current_month = YearMonth::current(UtcOffset::UTC);

        assert_eq!(resolve_month(Some("2024-13"), UtcOffset::UTC), current_month);
        assert_eq!(resolve_month(Some("soon"), UtcOffset::UTC), current_month);
        assert_eq!(resolve_month(None, UtcOffset::UTC), current_month);
        assert_eq!(
            resolve_month(Some("2024-02"), UtcOffset::UTC),
            YearMonth::new(2024, Month::February)
        );
    }

    #[test]
    fn form_date_stays_in_selected_month() {
        let today = time::macros::date!(2024 - 03 - 17);

        assert_eq!(
            default_form_date(YearMonth::new(2024, Month::March), today),
            today
        );
        assert_eq!(
            default_form_date(YearMonth::new(2023, Month::November), today),
            time::macros::date!(2023 - 11 - 01)
        );
    }

    #[track_caller]
    fn assert_element_exists(html: &Html, selector: &str) {
        let parsed = Selector::parse(selector).unwrap();
        assert!(
            html.select(&parsed).next().is_some(),
            "Element '{selector}' not found"
        );
    }
}
