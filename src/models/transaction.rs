//! Transaction model
//!
//! A single income or expense entry. The sign of the amount is the only
//! thing distinguishing the two.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Which side of the ledger an entry falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Income,
    Expense,
    /// Zero amount; counts toward neither total
    Neutral,
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique, creation-time based identifier
    pub id: TransactionId,

    /// Free-form label
    pub text: String,

    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Category chosen on entry
    pub category: Category,

    /// Date the entry was created
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        text: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            amount,
            category,
            date,
        }
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn flow(&self) -> Flow {
        if self.is_income() {
            Flow::Income
        } else if self.is_expense() {
            Flow::Expense
        } else {
            Flow::Neutral
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.text,
            self.amount,
            self.category
        )
    }
}
