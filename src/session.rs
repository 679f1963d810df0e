//! The session owns the transactions, the categories and the database they are saved to.

use rusqlite::Connection;

use crate::{
    Error,
    category::{CategoryName, CategoryRegistry, CustomCategories, TransactionKind},
    db::{CUSTOM_CATEGORIES_KEY, TRANSACTIONS_KEY, initialize, load_record, save_record},
    transaction::{NewTransaction, Transaction, TransactionId, TransactionStore},
};

/// The state of one user's finances.
///
/// Every change is written to the database before the method returns. If the
/// write fails, the in-memory change is undone so memory and storage agree.
#[derive(Debug)]
pub struct Session {
    connection: Connection,
    transactions: TransactionStore,
    categories: CategoryRegistry,
}

impl Session {
    /// Load the session saved in `connection`, creating the tables if needed.
    ///
    /// Missing or unreadable records start out empty.
    ///
    /// # Errors
    /// Returns an error if the tables cannot be created or there is an SQL error.
    pub fn open(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        let transactions: TransactionStore = load_record(TRANSACTIONS_KEY, &connection)?;
        let custom_categories: CustomCategories = load_record(CUSTOM_CATEGORIES_KEY, &connection)?;

        tracing::info!(
            "loaded {} transactions, {} custom income categories and {} custom expense categories",
            transactions.len(),
            custom_categories.income.len(),
            custom_categories.expense.len()
        );

        Ok(Self {
            connection,
            transactions,
            categories: CategoryRegistry::new(custom_categories),
        })
    }

    /// All transactions in the order they were added.
    pub fn transactions(&self) -> &TransactionStore {
        &self.transactions
    }

    /// The default categories along with any custom ones the user has added.
    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    /// Validate and save a new transaction.
    ///
    /// # Errors
    /// - [Error::InvalidAmount] if the amount is not a positive number.
    /// - [Error::InvalidCategory] if the category does not exist for the transaction kind.
    /// - Any error from saving the transactions, in which case nothing is added.
    pub fn add_transaction(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let amount = new_transaction.signed_amount()?;

        if !self
            .categories
            .contains(new_transaction.kind, &new_transaction.category)
        {
            return Err(Error::InvalidCategory {
                kind: new_transaction.kind,
                name: new_transaction.category,
            });
        }

        let id = self.transactions.next_id();
        let transaction = new_transaction.finalize(id, amount);
        self.transactions.push(transaction.clone());

        if let Err(error) = self.save_transactions() {
            self.transactions.pop();
            return Err(error);
        }

        tracing::debug!("added transaction {id}");

        Ok(transaction)
    }

    /// Delete the transaction with `id`.
    ///
    /// Returns `false` without changing anything if there is no such transaction.
    ///
    /// # Errors
    /// Returns an error if the transactions cannot be saved, in which case
    /// nothing is deleted.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<bool, Error> {
        let Some((index, removed)) = self.transactions.remove(id) else {
            tracing::debug!("ignoring delete for unknown transaction {id}");
            return Ok(false);
        };

        if let Err(error) = self.save_transactions() {
            self.transactions.restore(index, removed);
            return Err(error);
        }

        tracing::debug!("deleted transaction {id}");

        Ok(true)
    }

    /// Add a custom category for `kind`.
    ///
    /// # Errors
    /// - [Error::EmptyCategoryName] if `name` is blank.
    /// - [Error::DuplicateCategory] if the name already exists for `kind`.
    /// - Any error from saving the categories, in which case nothing is added.
    pub fn add_category(&mut self, kind: TransactionKind, name: &str) -> Result<CategoryName, Error> {
        let name = self.categories.add_category(kind, name)?;

        if let Err(error) = save_record(
            CUSTOM_CATEGORIES_KEY,
            self.categories.custom(),
            &self.connection,
        ) {
            self.categories.remove_last(kind);
            return Err(error);
        }

        tracing::debug!("added {kind} category \"{name}\"");

        Ok(name)
    }

    fn save_transactions(&self) -> Result<(), Error> {
        save_record(TRANSACTIONS_KEY, &self.transactions, &self.connection)
    }
}
