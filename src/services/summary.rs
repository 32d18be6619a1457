//! Ledger aggregates
//!
//! Income, expense and balance, recomputed from the full ledger on every
//! call. Nothing is cached between calls.

use crate::models::{Flow, Money};

use super::ledger::Ledger;

/// Derived totals for the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of all positive amounts
    pub income: Money,
    /// Sum of the absolute values of all negative amounts
    pub expense: Money,
    /// income - expense
    pub balance: Money,
}

impl Totals {
    /// Totals with one more amount folded in, None if any total would overflow
    pub fn checked_with(&self, amount: Money) -> Option<Totals> {
        let (income, expense) = if amount.is_positive() {
            (self.income.checked_add(amount)?, self.expense)
        } else if amount.is_negative() {
            (self.income, self.expense.checked_sub(amount)?)
        } else {
            (self.income, self.expense)
        };

        Some(Totals {
            income,
            expense,
            balance: income.checked_sub(expense)?,
        })
    }

    /// Share of income in the income/expense pie, None when both are zero
    pub fn income_share(&self) -> Option<f64> {
        let total = self.income.as_f64() + self.expense.as_f64();
        if total > 0.0 {
            Some(self.income.as_f64() / total)
        } else {
            None
        }
    }
}

/// Compute income, expense and balance over every entry in the ledger
pub fn aggregate(ledger: &Ledger) -> Totals {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    // Saturates; the tracker refuses entries that would overflow
    for txn in ledger {
        match txn.flow() {
            Flow::Income => income = income.saturating_add(txn.amount),
            Flow::Expense => expense = expense.saturating_add(txn.amount.abs()),
            Flow::Neutral => {}
        }
    }

    // Both sides are non-negative, so the difference fits
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}
