//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod summary;

pub use category::handle_categories_command;
pub use summary::{handle_summary_command, parse_add_arg, SummaryArgs, TextReport};
