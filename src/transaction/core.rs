//! Defines the core data models for transactions.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, category::TransactionKind};

/// Identifier for a transaction, unique within a session.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, pass a [NewTransaction] to
/// [crate::Session::add_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: f64,
    /// The name of the category the transaction belongs to.
    pub category: String,
    /// Local midnight of the day the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Transaction {
    /// Whether the transaction is income or an expense.
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_amount(self.amount)
    }

    /// The day the transaction happened, in the timezone it was recorded in.
    pub fn calendar_date(&self) -> Date {
        self.date.date()
    }
}

/// The user input for a transaction that has not been saved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// How much money was earned or spent, always positive.
    pub amount: f64,
    /// Decides the sign of the stored amount.
    pub kind: TransactionKind,
    /// The category name, must exist for `kind`.
    pub category: String,
    /// Local midnight of the day the transaction happened.
    pub date: OffsetDateTime,
}

impl NewTransaction {
    /// The amount with the sign given by the transaction kind.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if the amount is not a positive, finite number.
    pub fn signed_amount(&self) -> Result<f64, Error> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        Ok(match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        })
    }

    pub(crate) fn finalize(self, id: TransactionId, amount: f64) -> Transaction {
        Transaction {
            id,
            description: self.description.trim().to_owned(),
            amount,
            category: self.category,
            date: self.date,
        }
    }
}
