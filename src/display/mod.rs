//! Display formatting for terminal output
//!
//! Text renderings of ledger entries, totals and warnings shared by the
//! command-line output and the TUI.

pub mod summary;
pub mod transaction;

pub use summary::{format_budget_set, format_summary};
pub use transaction::{format_list_item, format_transaction_table};
