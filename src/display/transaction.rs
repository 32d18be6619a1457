//! Transaction display formatting
//!
//! List items for the ledger and a table form for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::Transaction;

/// Format a ledger entry as a list item: `<text>  <sign><symbol><amount>`
pub fn format_list_item(txn: &Transaction, symbol: &str) -> String {
    format!("{}  {}", txn.text, txn.amount.format_signed(symbol))
}

/// Row of the transaction table
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the whole ledger as a table, in insertion order
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = transactions.iter().enumerate().map(|(i, txn)| TransactionRow {
        index: i + 1,
        date: txn.date.format(&settings.date_format).to_string(),
        text: txn.text.clone(),
        category: txn.category.name(),
        amount: txn.amount.format_signed(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
