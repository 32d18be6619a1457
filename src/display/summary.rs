//! Totals and budget warning formatting

use crate::models::Money;
use crate::services::Summary;

/// Format balance, income, expense, budget and any warning as text lines
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let totals = &summary.totals;
    let budget = summary.budget;
    let mut output = String::new();

    output.push_str(&format!("Balance: {}\n", totals.balance.format_with_symbol(symbol)));
    output.push_str(&format!("Income:  {}\n", totals.income.format_with_symbol(symbol)));
    output.push_str(&format!("Expense: {}\n", totals.expense.format_with_symbol(symbol)));

    if budget.is_positive() {
        output.push_str(&format!("Budget:  {}\n", budget.format_with_symbol(symbol)));
    } else {
        output.push_str("Budget:  (not set)\n");
    }

    if let Some(message) = summary.warning.message(symbol) {
        output.push('\n');
        output.push_str(&message);
        output.push('\n');
    }

    output
}

/// Confirmation shown after a budget is accepted
pub fn format_budget_set(budget: Money, symbol: &str) -> String {
    format!("Budget of {} set successfully.", budget.format_with_symbol(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Totals, WarningState};

    fn summary(income: i64, expense: i64, budget: i64, warning: WarningState) -> Summary {
        Summary {
            totals: Totals {
                income: Money::from_cents(income),
                expense: Money::from_cents(expense),
                balance: Money::from_cents(income - expense),
            },
            budget: Money::from_cents(budget),
            warning,
        }
    }

    #[test]
    fn test_summary_without_budget() {
        let text = format_summary(&summary(100_000, 25_000, 0, WarningState::Hidden), "₹");
        assert!(text.contains("Balance: ₹750.00"));
        assert!(text.contains("Income:  ₹1000.00"));
        assert!(text.contains("Expense: ₹250.00"));
        assert!(text.contains("(not set)"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_summary_with_warning() {
        let warning = WarningState::Exceeded {
            expense: Money::from_cents(25_000),
            budget: Money::from_cents(20_000),
        };
        let text = format_summary(&summary(0, 25_000, 20_000, warning), "₹");
        assert!(text.contains("Balance: -₹250.00"));
        assert!(text.contains("Warning: Budget Exceeded! Total Expense: ₹250.00 > Budget: ₹200.00"));
    }

    #[test]
    fn test_budget_confirmation() {
        assert_eq!(
            format_budget_set(Money::from_cents(20_000), "₹"),
            "Budget of ₹200.00 set successfully."
        );
    }
}
