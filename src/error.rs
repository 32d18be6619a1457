//! Custom error types for track-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for track-cli operations
#[derive(Error, Debug)]
pub enum TrackError {
    /// A submitted transaction had empty text or a non-numeric amount
    #[error("Please enter valid text and amount")]
    InvalidTransactionInput {
        /// What was wrong with the input
        reason: String,
    },

    /// A budget value was non-numeric or negative
    #[error("Please enter a valid budget amount.")]
    InvalidBudgetInput {
        /// The rejected input
        input: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Errors reading a previously exported CSV back in
    #[error("Import error: {0}")]
    Import(String),
}

impl TrackError {
    /// Create an invalid transaction input error
    pub fn invalid_transaction(reason: impl Into<String>) -> Self {
        Self::InvalidTransactionInput {
            reason: reason.into(),
        }
    }

    /// Create an invalid budget input error
    pub fn invalid_budget(input: impl Into<String>) -> Self {
        Self::InvalidBudgetInput {
            input: input.into(),
        }
    }

    /// Check if this is a user input validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransactionInput { .. } | Self::InvalidBudgetInput { .. }
        )
    }

    /// Detail for logs; validation errors carry more than their user-facing message
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidTransactionInput { reason } => reason.clone(),
            Self::InvalidBudgetInput { input } => format!("rejected budget input '{}'", input),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for TrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TrackError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for track-cli operations
pub type TrackResult<T> = Result<T, TrackError>;
