//! Core error types for slotfinder-core.
//!
//! Ordinary scheduling outcomes (no window, whole day free) are plain return
//! values. The errors here cover malformed input and the storage edges.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slotfinder-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Calendar file errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for the scheduling model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Start after end
    #[error("Invalid time range: end ({end}) must not be before start ({start})")]
    InvalidTimeRange { start: u32, end: u32 },

    /// Range leaves the day
    #[error("Time range end ({end}) is past the end of the day ({limit})")]
    OutOfDay { end: u32, limit: u32 },

    /// Unparseable wall-clock string
    #[error("Invalid clock time '{0}': expected HH:MM between 00:00 and 24:00")]
    InvalidClock(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Errors raised while loading a calendar file.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// File could not be read
    #[error("Failed to read calendar {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither json nor toml
    #[error("Unsupported calendar format '{0}' (expected json or toml)")]
    UnsupportedFormat(String),

    /// Contents did not parse
    #[error("Failed to parse calendar {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
