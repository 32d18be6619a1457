//! track-cli - Terminal personal finance tracker
//!
//! Records income and expense transactions for a single session, keeps
//! running totals, warns when expenses go over a budget and exports the
//! ledger as CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `services`: Ledger, aggregation, budget monitoring and the `Tracker` store
//! - `export`: CSV export and replay
//! - `display`: Text formatting for terminal output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use track_cli::models::Category;
//! use track_cli::services::{NullSink, Tracker, TransactionInput};
//!
//! let mut tracker = Tracker::new();
//! let input = TransactionInput::new("Salary", "1000", Category::Salary);
//! let summary = tracker.submit_transaction(&input, &mut NullSink).unwrap();
//! assert_eq!(summary.totals.balance.to_string(), "1000.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;

pub use error::TrackError;
