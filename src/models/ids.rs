//! Transaction identifiers
//!
//! Ids are creation-time based: milliseconds since the Unix epoch. Two entries
//! created in the same millisecond (or after the clock steps backwards) get
//! the previous id plus one, so ids stay unique and strictly increasing.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Create an id from a raw value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", self.0)
    }
}


/// Hands out monotonically increasing, time-based ids
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> TransactionId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id for a given clock reading in milliseconds
    pub fn next_at(&mut self, now_millis: u64) -> TransactionId {
        let raw = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(raw);
        TransactionId(raw)
    }
}
