//! Configuration module for track-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings (currency, date format, theme, export location)
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::TrackPaths;
pub use settings::{Settings, ThemeMode};
