//! The in-memory, insertion ordered list of transactions.

use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionId};

/// All recorded transactions in the order they were added.
///
/// Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionStore(Vec<Transaction>);

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self(transactions)
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The identifier for the next transaction: one more than the largest
    /// existing identifier, starting at 1.
    pub fn next_id(&self) -> TransactionId {
        self.0
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .map_or(1, |max_id| max_id + 1)
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.0.push(transaction);
    }

    /// Remove the most recently pushed transaction.
    pub(crate) fn pop(&mut self) -> Option<Transaction> {
        self.0.pop()
    }

    /// Remove the transaction with `id`, returning it with its former position.
    pub fn remove(&mut self, id: TransactionId) -> Option<(usize, Transaction)> {
        let index = self.0.iter().position(|transaction| transaction.id == id)?;

        Some((index, self.0.remove(index)))
    }

    /// Put a removed transaction back at `index`.
    pub(crate) fn restore(&mut self, index: usize, transaction: Transaction) {
        let index = index.min(self.0.len());
        self.0.insert(index, transaction);
    }

    /// The transactions with the newest date first.
    ///
    /// Transactions on the same day are listed newest entry first.
    pub fn newest_first(&self) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.0.iter().rev().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        transactions
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::transaction::{Transaction, TransactionStore};

    fn transaction(id: i64, date: time::OffsetDateTime) -> Transaction {
        Transaction {
            id,
            description: format!("#{id}"),
            amount: 1.0,
            category: "Salary".to_owned(),
            date,
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(TransactionStore::default().next_id(), 1);
    }

    #[test]
    fn next_id_is_one_more_than_max() {
        let store = TransactionStore::new(vec![
            transaction(4, datetime!(2024-01-01 0:00 UTC)),
            transaction(2, datetime!(2024-01-02 0:00 UTC)),
        ]);

        assert_eq!(store.next_id(), 5);
    }

    #[test]
    fn remove_returns_position() {
        let mut store = TransactionStore::new(vec![
            transaction(1, datetime!(2024-01-01 0:00 UTC)),
            transaction(2, datetime!(2024-01-02 0:00 UTC)),
            transaction(3, datetime!(2024-01-03 0:00 UTC)),
        ]);

        let (index, removed) = store.remove(2).unwrap();

        assert_eq!(index, 1);
        assert_eq!(removed.id, 2);
        assert_eq!(store.len(), 2);

        store.restore(index, removed);
        let ids: Vec<i64> = store.as_slice().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let mut store = TransactionStore::new(vec![transaction(1, datetime!(2024-01-01 0:00 UTC))]);

        assert!(store.remove(42).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn newest_first_orders_by_date_then_entry() {
        let store = TransactionStore::new(vec![
            transaction(1, datetime!(2024-01-02 0:00 UTC)),
            transaction(2, datetime!(2024-01-05 0:00 UTC)),
            transaction(3, datetime!(2024-01-02 0:00 UTC)),
        ]);

        let ids: Vec<i64> = store.newest_first().iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn serializes_as_array() {
        let store = TransactionStore::new(vec![transaction(1, datetime!(2024-01-01 0:00 UTC))]);

        let json = serde_json::to_value(&store).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["id"], 1);
    }
}
