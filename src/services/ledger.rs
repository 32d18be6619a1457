//! In-memory, append-only ledger
//!
//! Holds every transaction recorded during the session in insertion order.
//! Entries are never edited or removed.

use crate::models::Transaction;

/// Append-only sequence of transactions
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction at the end
    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionId};
    use chrono::NaiveDate;

    fn txn(id: u64, text: &str, cents: i64) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            text,
            Money::from_cents(cents),
            Category::Other,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.append(txn(3, "c", 300));
        ledger.append(txn(1, "a", 100));
        ledger.append(txn(2, "b", 200));

        let texts: Vec<_> = ledger.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["c", "a", "b"]);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.all()[ledger.len() - 1].text, "b");
    }

    #[test]
    fn test_append_does_not_touch_earlier_entries() {
        let mut ledger = Ledger::new();
        ledger.append(txn(1, "Salary", 100_000));
        let before = ledger.all().to_vec();

        for i in 2..20 {
            ledger.append(txn(i, "more", -(i as i64) * 100));
        }

        assert_eq!(&ledger.all()[..1], &before[..]);
    }
}
