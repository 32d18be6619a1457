//! Tracing subscriber setup
//!
//! Command-line runs log to stderr. The TUI owns the terminal, so it logs to
//! a file in the config directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{TrackError, TrackResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "TRACK_LOG";

static TRACING_INIT: Once = Once::new();

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize logging to stderr
pub fn init_stderr(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter(default_directive))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Initialize logging to an append-only file
pub fn init_file(path: &Path, default_directive: &str) -> TrackResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackError::Io(format!("Failed to open log file: {}", e)))?;

    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(filter(default_directive))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}
