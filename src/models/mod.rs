//! Core data models for track-cli
//!
//! The transaction record and the value types it is built from.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use ids::{IdGenerator, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Flow, Transaction};
