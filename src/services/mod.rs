//! Service layer for track-cli
//!
//! The ledger update cycle: append to the ledger, recompute aggregates,
//! evaluate the budget, hand everything to a presentation sink.

pub mod budget;
pub mod ledger;
pub mod summary;
pub mod tracker;

pub use budget::{BudgetMonitor, WarningState};
pub use ledger::Ledger;
pub use summary::{aggregate, Totals};
pub use tracker::{LedgerSink, NullSink, Summary, Tracker, TransactionInput};
