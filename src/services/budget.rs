//! Budget monitor
//!
//! A single expense ceiling for the session. Zero means no limit.

use crate::error::{TrackError, TrackResult};
use crate::models::Money;

/// Outcome of comparing total expense against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningState {
    #[default]
    Hidden,
    Exceeded { expense: Money, budget: Money },
}

impl WarningState {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    /// Warning text shown to the user, if any
    pub fn message(&self, symbol: &str) -> Option<String> {
        match self {
            Self::Hidden => None,
            Self::Exceeded { expense, budget } => Some(format!(
                "Warning: Budget Exceeded! Total Expense: {} > Budget: {}",
                expense.format_with_symbol(symbol),
                budget.format_with_symbol(symbol)
            )),
        }
    }
}

/// Holds the user's budget and evaluates expense totals against it
#[derive(Debug, Default, Clone)]
pub struct BudgetMonitor {
    budget: Money,
}

impl BudgetMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current budget (zero when unset)
    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn is_set(&self) -> bool {
        self.budget.is_positive()
    }

    /// Parse and apply a typed budget value
    ///
    /// Non-numeric or negative input is rejected and leaves the budget unchanged.
    pub fn set(&mut self, input: &str) -> TrackResult<Money> {
        let amount = Money::parse(input).map_err(|_| TrackError::invalid_budget(input.trim()))?;
        self.set_amount(amount)
    }

    /// Apply an already parsed budget value
    pub fn set_amount(&mut self, amount: Money) -> TrackResult<Money> {
        if amount.is_negative() {
            return Err(TrackError::invalid_budget(amount.to_string()));
        }
        self.budget = amount;
        Ok(amount)
    }

    /// Exceeded iff a budget is set and expense is strictly above it
    pub fn check(&self, expense: Money) -> WarningState {
        if self.is_set() && expense > self.budget {
            WarningState::Exceeded {
                expense,
                budget: self.budget,
            }
        } else {
            WarningState::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_budget_never_warns() {
        let monitor = BudgetMonitor::new();
        assert_eq!(monitor.budget(), Money::zero());
        for cents in [0, 1, 25_000, i64::MAX / 2] {
            assert_eq!(monitor.check(Money::from_cents(cents)), WarningState::Hidden);
        }
    }

    #[test]
    fn test_zero_budget_is_unset() {
        let mut monitor = BudgetMonitor::new();
        monitor.set("200").unwrap();
        monitor.set("0").unwrap();
        assert!(!monitor.is_set());
        assert_eq!(monitor.check(Money::from_cents(25_000)), WarningState::Hidden);
    }

    #[test]
    fn test_exceeded_scenario() {
        let mut monitor = BudgetMonitor::new();
        monitor.set("200").unwrap();

        let state = monitor.check(Money::from_cents(25_000));
        assert_eq!(
            state,
            WarningState::Exceeded {
                expense: Money::from_cents(25_000),
                budget: Money::from_cents(20_000),
            }
        );
        assert_eq!(
            state.message("₹").unwrap(),
            "Warning: Budget Exceeded! Total Expense: ₹250.00 > Budget: ₹200.00"
        );
    }

    #[test]
    fn test_expense_equal_to_budget_is_hidden() {
        let mut monitor = BudgetMonitor::new();
        monitor.set("200.00").unwrap();
        assert_eq!(monitor.check(Money::from_cents(20_000)), WarningState::Hidden);
        assert!(monitor.check(Money::from_cents(20_001)).is_exceeded());
    }

    #[test]
    fn test_invalid_input_leaves_budget_alone() {
        let mut monitor = BudgetMonitor::new();
        monitor.set("150").unwrap();

        for input in ["abc", "-10", "", "  "] {
            let err = monitor.set(input).unwrap_err();
            assert!(matches!(err, TrackError::InvalidBudgetInput { .. }));
        }
        assert_eq!(monitor.budget(), Money::from_cents(15_000));
    }
}
