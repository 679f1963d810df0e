//! Categories for grouping transactions, split by income and expense.

mod create;
mod domain;
mod options;
mod registry;

pub use create::{create_category_endpoint, get_categories_page};
pub use domain::{CategoryName, CustomCategories, TransactionKind};
pub use options::{category_options, get_category_options};
pub use registry::CategoryRegistry;
