//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` input for creating transactions
//! - The in-memory `TransactionStore`
//! - The entry form, the transaction table and the create/delete endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod store;
mod table;

pub use core::{NewTransaction, Transaction, TransactionId};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use form::{TransactionFormDefaults, transaction_form};
pub use store::TransactionStore;
pub use table::transactions_table;
