//! Scroll bar configuration types.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Orientation;

/// Construction options for a [`ScrollBar`](crate::ScrollBar).
///
/// Every field is optional when deserialized. Out-of-range numbers are
/// clamped by the widget, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollBarOptions {
    /// Axis of the scroll bar.
    pub orientation: Orientation,
    /// Initial value.
    pub value: f64,
    /// Largest reachable value.
    pub max_value: f64,
    /// Size of one page, in value units.
    pub page_size: f64,
    /// Click-and-hold timing.
    pub repeat: RepeatConfig,
}

impl Default for ScrollBarOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            value: 0.0,
            max_value: 100.0,
            page_size: 10.0,
            repeat: RepeatConfig::default(),
        }
    }
}

impl ScrollBarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the initial value.
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the maximum.
    pub fn max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: f64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the repeat timing.
    pub fn repeat(mut self, repeat: RepeatConfig) -> Self {
        self.repeat = repeat;
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// Timing of hold-to-repeat on buttons and track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RepeatConfig {
    /// Delay before the first repeat, in milliseconds.
    pub initial_delay_ms: u64,
    /// Delay between subsequent repeats, in milliseconds.
    pub interval_ms: u64,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 350,
            interval_ms: 20,
        }
    }
}

impl RepeatConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Errors that can occur when loading options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scroll bar config: {0}")]
    Parse(#[from] toml::de::Error),
}
