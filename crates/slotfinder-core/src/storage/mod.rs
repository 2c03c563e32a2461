//! Storage edges: the TOML configuration file and calendar files.
//!
//! Nothing here is used by the scheduling algorithm itself; these are the
//! collaborators that materialize its inputs.

pub mod calendar;
mod config;

pub use calendar::CalendarFile;
pub use config::{ClockStyle, Config, OutputConfig, OutputFormat, QueryConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/slotfinder[-dev]/` based on SLOTFINDER_ENV.
///
/// Set SLOTFINDER_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SLOTFINDER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("slotfinder-dev")
    } else {
        base_dir.join("slotfinder")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
