//! Path management for track-cli
//!
//! Only configuration and the log file live on disk; the ledger itself is
//! never written anywhere except through an explicit CSV export.
//!
//! ## Path Resolution Order
//!
//! 1. `TRACK_CLI_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/track-cli` or `~/.config/track-cli`
//! 3. Windows: `%APPDATA%\track-cli`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TrackError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TRACK_CLI_CONFIG_DIR";

/// Manages all paths used by track-cli
#[derive(Debug, Clone)]
pub struct TrackPaths {
    /// Base directory for configuration and logs
    base_dir: PathBuf,
}

impl TrackPaths {
    /// Create a new TrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, TrackError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/track-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("track.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Resolve the platform config directory
fn resolve_default_path() -> Result<PathBuf, TrackError> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("track-cli"))
        .ok_or_else(|| TrackError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("track.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = TrackPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        env::remove_var(CONFIG_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("track-cli");
        let paths = TrackPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
