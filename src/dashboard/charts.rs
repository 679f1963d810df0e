//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for the selected month:
//! - **Trend Chart**: Running balance, income and expense totals for each day
//! - **Category Chart**: Donut chart of the money moved per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, LegendType, Title},
    datatype::DataPoint,
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Label,
        LineStyle, Tooltip, Trigger,
    },
    series::{Line, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, DailySeries},
    html::HeadElement,
    month::YearMonth,
};

/// The colour of the balance line.
pub const BALANCE_COLOR: &str = "#10B981";
/// The colour of the income line.
pub const INCOME_COLOR: &str = "#3B82F6";
/// The colour of the expense line.
pub const EXPENSE_COLOR: &str = "#EF4444";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded bg-white dark:bg-gray-100 shadow"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Escape `text` so it cannot end the surrounding `<script>` element.
///
/// Chart options carry category names typed by the user. `<\/` and `<\!--`
/// read the same inside JavaScript strings.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/").replace("<!--", "<\\!--")
}

/// The running totals for each day of `month` as three lines.
pub(super) fn trend_chart(series: &DailySeries, month: YearMonth) -> Chart {
    let labels: Vec<String> = (1..=month.days()).map(|day| day.to_string()).collect();

    Chart::new()
        .title(Title::new().text("Monthly Trend").subtext(month.label()))
        .tooltip(currency_tooltip())
        .legend(Legend::new().bottom("0%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom(40)
                .top(70)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(trend_line("Total Balance", BALANCE_COLOR, &series.balance))
        .series(trend_line("Total Income", INCOME_COLOR, &series.income))
        .series(trend_line("Total Expense", EXPENSE_COLOR, &series.expense))
}

fn trend_line(name: &str, color: &str, values: &[Option<f64>]) -> Line {
    // ECharts treats "-" as a missing value.
    let data: Vec<DataPoint> = values
        .iter()
        .map(|value| match value {
            Some(value) => DataPoint::from(*value),
            None => DataPoint::from("-"),
        })
        .collect();

    Line::new()
        .name(name)
        .connect_nulls(true)
        .item_style(ItemStyle::new().color(color))
        .line_style(LineStyle::new().color(color))
        .data(data)
}

/// The share of each category in the money moved during the month.
pub(super) fn category_chart(breakdown: &[CategoryTotal], month: YearMonth) -> Chart {
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|total| (total.value, total.name.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Category Breakdown")
                .subtext(month.label()),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().type_(LegendType::Scroll).bottom("0%"))
        .series(
            Pie::new()
                .name("Categories")
                .radius(vec!["40%", "70%"])
                .avoid_label_overlap(true)
                .item_style(
                    ItemStyle::new()
                        .border_radius(6)
                        .border_color("#fff")
                        .border_width(2),
                )
                .label(Label::new().show(false))
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return (typeof number === 'number') ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
}
