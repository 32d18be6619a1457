//! Tracker: the session's application state
//!
//! Owns the ledger, the budget monitor and the id generator. Every mutation
//! goes through here and, when it succeeds, is followed by a full recompute
//! of the totals and warning state that is pushed to the presentation sink.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::error::{TrackError, TrackResult};
use crate::models::{Category, IdGenerator, Money, Transaction};

use super::budget::{BudgetMonitor, WarningState};
use super::ledger::Ledger;
use super::summary::{aggregate, Totals};

/// Raw values from the transaction form
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub text: String,
    pub amount: String,
    pub category: Category,
}

impl TransactionInput {
    pub fn new(text: impl Into<String>, amount: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            amount: amount.into(),
            category,
        }
    }
}

/// Result of one run of the recompute pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub totals: Totals,
    /// Budget in force when the summary was computed (zero when unset)
    pub budget: Money,
    pub warning: WarningState,
}

/// Receives the full ledger and fresh aggregates after every mutation
///
/// Implementations redraw from scratch; nothing is diffed.
pub trait LedgerSink {
    fn redraw(&mut self, transactions: &[Transaction], summary: &Summary);
}

/// A sink that ignores redraws
#[derive(Debug, Default)]
pub struct NullSink;

impl LedgerSink for NullSink {
    fn redraw(&mut self, _transactions: &[Transaction], _summary: &Summary) {}
}

/// Session state store
#[derive(Debug, Default)]
pub struct Tracker {
    ledger: Ledger,
    budget: BudgetMonitor,
    ids: IdGenerator,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.all()
    }

    /// Current budget (zero when unset)
    pub fn budget(&self) -> Money {
        self.budget.budget()
    }

    /// Recompute totals and warning state from the full ledger
    pub fn summary(&self) -> Summary {
        let totals = aggregate(&self.ledger);
        let warning = self.budget.check(totals.expense);
        Summary {
            totals,
            budget: self.budget.budget(),
            warning,
        }
    }

    /// Run the recompute pipeline and hand the result to a sink
    pub fn refresh(&self, sink: &mut dyn LedgerSink) -> Summary {
        let summary = self.summary();
        if let WarningState::Exceeded { expense, budget } = summary.warning {
            warn!(expense = %expense, budget = %budget, "budget exceeded");
        }
        sink.redraw(self.ledger.all(), &summary);
        summary
    }

    /// Validate form input, append a transaction dated today, then refresh
    pub fn submit_transaction(
        &mut self,
        input: &TransactionInput,
        sink: &mut dyn LedgerSink,
    ) -> TrackResult<Summary> {
        self.submit_transaction_on(input, Local::now().date_naive(), sink)
    }

    /// Same as [`Tracker::submit_transaction`] with an explicit date
    pub fn submit_transaction_on(
        &mut self,
        input: &TransactionInput,
        date: NaiveDate,
        sink: &mut dyn LedgerSink,
    ) -> TrackResult<Summary> {
        let transaction = match self.build_transaction(input, date) {
            Ok(txn) => txn,
            Err(err) => {
                warn!(reason = %err.detail(), "transaction rejected");
                return Err(err);
            }
        };

        info!(
            id = %transaction.id,
            amount = %transaction.amount,
            category = %transaction.category,
            "transaction recorded"
        );
        self.ledger.append(transaction);

        Ok(self.refresh(sink))
    }

    /// Parse and apply a typed budget value, then refresh
    pub fn set_budget(&mut self, input: &str, sink: &mut dyn LedgerSink) -> TrackResult<Money> {
        let budget = self.budget.set(input).map_err(|err| {
            warn!(reason = %err.detail(), "budget rejected");
            err
        })?;

        info!(budget = %budget, "budget set");
        self.refresh(sink);
        Ok(budget)
    }

    fn build_transaction(
        &mut self,
        input: &TransactionInput,
        date: NaiveDate,
    ) -> TrackResult<Transaction> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(TrackError::invalid_transaction("text is empty"));
        }

        let amount = Money::parse(&input.amount).map_err(|e| {
            TrackError::invalid_transaction(format!("amount is not a number: {}", e))
        })?;

        if aggregate(&self.ledger).checked_with(amount).is_none() {
            return Err(TrackError::invalid_transaction(format!(
                "amount {} would overflow the ledger totals",
                amount
            )));
        }

        Ok(Transaction::new(
            self.ids.next_id(),
            text,
            amount,
            input.category,
            date,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every redraw it receives
    #[derive(Default)]
    struct RecordingSink {
        redraws: Vec<(usize, Summary)>,
    }

    impl LedgerSink for RecordingSink {
        fn redraw(&mut self, transactions: &[Transaction], summary: &Summary) {
            self.redraws.push((transactions.len(), *summary));
        }
    }

    fn input(text: &str, amount: &str, category: Category) -> TransactionInput {
        TransactionInput::new(text, amount, category)
    }

    #[test]
    fn test_scenario_totals() {
        let mut tracker = Tracker::new();
        let mut sink = RecordingSink::default();

        tracker
            .submit_transaction(&input("Salary", "1000", Category::Salary), &mut sink)
            .unwrap();
        tracker
            .submit_transaction(&input("Food", "-200", Category::Food), &mut sink)
            .unwrap();
        let summary = tracker
            .submit_transaction(&input("Transport", "-50", Category::Transport), &mut sink)
            .unwrap();

        assert_eq!(summary.totals.income, Money::from_cents(100_000));
        assert_eq!(summary.totals.expense, Money::from_cents(25_000));
        assert_eq!(summary.totals.balance, Money::from_cents(75_000));
        assert_eq!(summary.warning, WarningState::Hidden);
        assert_eq!(sink.redraws.len(), 3);
        assert_eq!(sink.redraws[2].0, 3);
    }

    #[test]
    fn test_setting_budget_reevaluates_immediately() {
        let mut tracker = Tracker::new();
        let mut sink = RecordingSink::default();
        tracker
            .submit_transaction(&input("Food", "-200", Category::Food), &mut sink)
            .unwrap();
        tracker
            .submit_transaction(&input("Transport", "-50", Category::Transport), &mut sink)
            .unwrap();

        tracker.set_budget("200", &mut sink).unwrap();

        let (len, summary) = sink.redraws.last().copied().unwrap();
        assert_eq!(len, 2);
        assert_eq!(
            summary.warning,
            WarningState::Exceeded {
                expense: Money::from_cents(25_000),
                budget: Money::from_cents(20_000),
            }
        );
    }

    #[test]
    fn test_invalid_input_is_rejected_without_side_effects() {
        let mut tracker = Tracker::new();
        let mut sink = RecordingSink::default();

        let err = tracker
            .submit_transaction(&input("", "abc", Category::Other), &mut sink)
            .unwrap_err();
        assert!(matches!(err, TrackError::InvalidTransactionInput { .. }));

        let err = tracker
            .submit_transaction(&input("Lunch", "abc", Category::Food), &mut sink)
            .unwrap_err();
        assert!(matches!(err, TrackError::InvalidTransactionInput { .. }));

        let err = tracker
            .submit_transaction(&input("   ", "10", Category::Food), &mut sink)
            .unwrap_err();
        assert!(err.is_validation());

        assert!(tracker.transactions().is_empty());
        assert!(sink.redraws.is_empty());
    }

    #[test]
    fn test_invalid_budget_is_rejected_without_side_effects() {
        let mut tracker = Tracker::new();
        let mut sink = RecordingSink::default();
        tracker.set_budget("300", &mut sink).unwrap();

        assert!(tracker.set_budget("-1", &mut sink).is_err());
        assert!(tracker.set_budget("lots", &mut sink).is_err());

        assert_eq!(tracker.budget(), Money::from_cents(30_000));
        assert_eq!(sink.redraws.len(), 1);
    }

    #[test]
    fn test_text_is_trimmed_and_ids_increase() {
        let mut tracker = Tracker::new();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        for i in 0..5 {
            tracker
                .submit_transaction_on(
                    &input(&format!("  item {} ", i), "1", Category::Other),
                    date,
                    &mut NullSink,
                )
                .unwrap();
        }

        let txns = tracker.transactions();
        assert_eq!(txns[0].text, "item 0");
        assert_eq!(txns[0].date, date);
        assert!(txns.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_amount_that_would_overflow_totals_is_rejected() {
        let mut tracker = Tracker::new();
        let mut sink = RecordingSink::default();
        let huge = "90000000000000000";

        tracker
            .submit_transaction(&input("Windfall", huge, Category::Salary), &mut sink)
            .unwrap();
        let err = tracker
            .submit_transaction(&input("Windfall again", huge, Category::Salary), &mut sink)
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(tracker.transactions().len(), 1);
        assert_eq!(sink.redraws.len(), 1);
        assert_eq!(tracker.summary().totals.income, Money::parse(huge).unwrap());

        // Expenses still fit
        let summary = tracker
            .submit_transaction(&input("Rent", "-100", Category::Bills), &mut sink)
            .unwrap();
        assert_eq!(summary.totals.expense, Money::from_cents(10_000));
    }

    #[test]
    fn test_zero_amount_is_recorded_but_not_counted() {
        let mut tracker = Tracker::new();
        let summary = tracker
            .submit_transaction(&input("Nothing", "0", Category::Other), &mut NullSink)
            .unwrap();

        assert_eq!(tracker.transactions().len(), 1);
        assert_eq!(summary.totals, Totals::default());
    }
}
