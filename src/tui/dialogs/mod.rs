//! Dialog components for the TUI

pub mod budget;
pub mod help;
pub mod transaction;
