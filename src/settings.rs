//! User settings loaded from a TOML file.

use crate::games::tictactoe::{Marker, PlayerId};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Starting markers and logging preferences.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Player X's marker at startup.
    #[serde(default = "default_x_marker")]
    player_x_marker: Marker,

    /// Player O's marker at startup.
    #[serde(default = "default_o_marker")]
    player_o_marker: Marker,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_marker() -> Marker {
    PlayerId::X.default_marker()
}

fn default_o_marker() -> Marker {
    PlayerId::O.default_marker()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("emoji_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_x_marker: default_x_marker(),
            player_o_marker: default_o_marker(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(
            x = %settings.player_x_marker,
            o = %settings.player_o_marker,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings = Settings::from_toml(r#"player_o_marker = "💍""#).unwrap();
        assert_eq!(*settings.player_o_marker(), Marker::from("💍"));
        assert_eq!(*settings.player_x_marker(), Marker::from("🩷"));
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_bad_toml_reports_location() {
        let err = Settings::from_toml("player_x_marker = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
        assert!(err.file.ends_with("settings.rs"));
    }
}
