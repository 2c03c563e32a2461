//! # Slotfinder Core Library
//!
//! Finds every window in a day where a meeting of a given length fits around
//! the attendees' existing events.
//!
//! ## Architecture
//!
//! - **Model**: [`TimeRange`] (half-open minutes of the day), [`Event`] and
//!   [`MeetingRequest`]
//! - **Busy collection**: events reduced to the ranges that block a set of
//!   attendees
//! - **Free windows**: the day minus the union of busy ranges, filtered by
//!   length
//! - **Query engine**: prefers windows that suit optional attendees too and
//!   falls back to mandatory attendees alone
//! - **Storage**: TOML configuration and JSON/TOML calendar files
//!
//! The scheduling path is pure and synchronous; only [`storage`] touches the
//! filesystem.
//!
//! ## Key Components
//!
//! - [`MeetingQuery`]: two-tier meeting search
//! - [`FreeIntervalFinder`]: running-maximum sweep over busy ranges
//! - [`Config`]: application configuration management
//! - [`CalendarFile`]: calendar loading

pub mod busy;
pub mod error;
pub mod event;
pub mod free;
pub mod query;
pub mod request;
pub mod storage;
pub mod time_range;

pub use busy::collect_busy;
pub use error::{CalendarError, ConfigError, CoreError, ValidationError};
pub use event::Event;
pub use free::{find_free_windows, FreeIntervalFinder};
pub use query::{find_meeting_times, MeetingQuery, QueryOutcome, Tier};
pub use request::MeetingRequest;
pub use storage::{CalendarFile, ClockStyle, Config, OutputFormat};
pub use time_range::{
    format_clock, parse_clock, TimeRange, END_OF_DAY, LAST_MINUTE_OF_DAY, START_OF_DAY,
};
