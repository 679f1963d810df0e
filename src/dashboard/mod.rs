//! Dashboard module
//!
//! Provides an overview page with the totals over every transaction, plus
//! the running totals and category breakdown of a selected month.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use handlers::{get_dashboard_page, get_summary};
