//! Calendar files.
//!
//! A calendar file lists the events of one day:
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "when": { "start": "09:00", "end": "09:15" }, "attendees": ["alice"] }
//!   ]
//! }
//! ```
//!
//! The same shape is accepted as TOML (`[[events]]` tables). Times may be
//! minutes from midnight or `HH:MM` strings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;
use crate::event::Event;

/// On-disk encoding of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarFormat {
    Json,
    Toml,
}

impl CalendarFormat {
    /// Pick the format from a file extension. Files without one are JSON.
    pub fn from_path(path: &Path) -> Result<Self, CalendarError> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(CalendarError::UnsupportedFormat(ext.to_string())),
        }
    }
}

/// The events of one day as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFile {
    #[serde(default)]
    pub events: Vec<Event>,
}

impl CalendarFile {
    /// Read and parse a calendar file.
    ///
    /// # Errors
    /// Returns [`CalendarError`] if the file is unreadable, has an unknown
    /// extension, or does not describe valid events.
    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let format = CalendarFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| CalendarError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let calendar = Self::parse(&content, format).map_err(|message| {
            CalendarError::ParseFailed {
                path: path.to_path_buf(),
                message,
            }
        })?;
        debug!(path = %path.display(), events = calendar.events.len(), "calendar loaded");
        Ok(calendar)
    }

    /// Parse calendar contents in the given format.
    pub fn parse(content: &str, format: CalendarFormat) -> Result<Self, String> {
        match format {
            CalendarFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            CalendarFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_range::TimeRange;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CalendarFormat::from_path(Path::new("day.json")).unwrap(),
            CalendarFormat::Json
        );
        assert_eq!(
            CalendarFormat::from_path(Path::new("day.TOML")).unwrap(),
            CalendarFormat::Toml
        );
        assert_eq!(
            CalendarFormat::from_path(Path::new("day")).unwrap(),
            CalendarFormat::Json
        );
        assert!(matches!(
            CalendarFormat::from_path(Path::new("day.ics")),
            Err(CalendarError::UnsupportedFormat(ext)) if ext == "ics"
        ));
    }

    #[test]
    fn test_parse_toml_calendar() {
        let content = r#"
[[events]]
title = "Standup"
attendees = ["alice", "bob"]
when = { start = "09:00", end = "09:15" }

[[events]]
title = "Review"
attendees = ["alice"]
when = { start = 840, duration = 60 }
"#;
        let calendar = CalendarFile::parse(content, CalendarFormat::Toml).unwrap();
        assert_eq!(calendar.events.len(), 2);
        assert_eq!(calendar.events[0].when, TimeRange::from_start_end(540, 555).unwrap());
        assert_eq!(calendar.events[1].when, TimeRange::from_start_end(840, 900).unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid_range() {
        let content = r#"{"events": [{"title": "Bad", "when": {"start": 700, "end": 600}}]}"#;
        assert!(CalendarFile::parse(content, CalendarFormat::Json).is_err());
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day.json");
        std::fs::write(
            &path,
            r#"{"events": [{"title": "Lunch", "when": {"start": "12:00", "end": "13:00"}, "attendees": ["A"]}]}"#,
        )
        .unwrap();

        let calendar = CalendarFile::load(&path).unwrap();
        assert_eq!(calendar.events[0].title, "Lunch");
        assert!(calendar.events[0].attendees.contains("A"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CalendarFile::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CalendarError::ReadFailed { .. })));
    }
}
