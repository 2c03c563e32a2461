//! Minute-of-day intervals.
//!
//! A [`TimeRange`] is a half-open `[start, end)` span of minutes inside a
//! single day. Ranges are validated on construction and never mutated.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive upper bound of the day (24 * 60).
pub const END_OF_DAY: u32 = 24 * 60;

/// Last addressable minute of the day. Used with the inclusive factory so the
/// closing window of a day ends at [`END_OF_DAY`].
pub const LAST_MINUTE_OF_DAY: u32 = END_OF_DAY - 1;

/// Half-open interval `[start, end)` of minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// The whole schedulable day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Build `[start, end)`.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if `start > end` or `end > END_OF_DAY`.
    pub fn from_start_end(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        if end > END_OF_DAY {
            return Err(ValidationError::OutOfDay {
                end,
                limit: END_OF_DAY,
            });
        }
        Ok(Self { start, end })
    }

    /// Build a range whose `end` is either exclusive or, when `inclusive` is
    /// set, names the last minute covered (so the stored end is `end + 1`).
    ///
    /// # Errors
    /// Same conditions as [`from_start_end`](Self::from_start_end), checked
    /// after the inclusive adjustment.
    pub fn from_start_end_inclusive(
        start: u32,
        end: u32,
        inclusive: bool,
    ) -> Result<Self, ValidationError> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        Self::from_start_end(start, end)
    }

    /// Build `[start, start + duration)`.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfDay`] if the range runs past midnight.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self, ValidationError> {
        Self::from_start_end(start, start.saturating_add(duration))
    }

    /// Caller guarantees `start <= end <= END_OF_DAY`.
    pub(crate) fn spanning(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= END_OF_DAY);
        Self { start, end }
    }

    /// Convert a wall-clock time to minutes from midnight.
    pub const fn minutes_of(hours: u32, minutes: u32) -> u32 {
        hours * 60 + minutes
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when the two ranges share at least one minute.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `point` lies in `[start, end)`.
    pub fn contains(&self, point: u32) -> bool {
        self.start <= point && point < self.end
    }

    /// True when `other` lies entirely within this range.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Comparator ordering ranges by start ascending.
    pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Comparator ordering ranges by end ascending.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// Render minutes from midnight as `HH:MM`. `1440` renders as `24:00`.
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse an `HH:MM` wall-clock string into minutes from midnight.
///
/// `24:00` is accepted as the end of the day.
///
/// # Errors
/// Returns [`ValidationError::InvalidClock`] for anything else that is not a
/// valid time of day.
pub fn parse_clock(value: &str) -> Result<u32, ValidationError> {
    let trimmed = value.trim();
    if trimmed == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| ValidationError::InvalidClock(value.to_string()))?;
    Ok(TimeRange::minutes_of(time.hour(), time.minute()))
}

/// A point in the day as written in input files: raw minutes or `"HH:MM"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ClockValue {
    Minutes(u32),
    Clock(String),
}

impl ClockValue {
    fn to_minutes(&self) -> Result<u32, ValidationError> {
        match self {
            Self::Minutes(m) => Ok(*m),
            Self::Clock(s) => parse_clock(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTimeRange {
    start: ClockValue,
    #[serde(default)]
    end: Option<ClockValue>,
    #[serde(default)]
    duration: Option<u32>,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = ValidationError;

    fn try_from(raw: RawTimeRange) -> Result<Self, Self::Error> {
        let start = raw.start.to_minutes()?;
        match (raw.end, raw.duration) {
            (Some(end), _) => Self::from_start_end(start, end.to_minutes()?),
            (None, Some(duration)) => Self::from_start_duration(start, duration),
            (None, None) => Err(ValidationError::InvalidTimeRange { start, end: start }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_day_bounds() {
        assert_eq!(TimeRange::WHOLE_DAY.start(), 0);
        assert_eq!(TimeRange::WHOLE_DAY.end(), 1440);
        assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
    }

    #[test]
    fn test_rejects_malformed_ranges() {
        assert_eq!(
            TimeRange::from_start_end(700, 600),
            Err(ValidationError::InvalidTimeRange { start: 700, end: 600 })
        );
        assert!(matches!(
            TimeRange::from_start_duration(1400, 60),
            Err(ValidationError::OutOfDay { .. })
        ));
    }

    #[test]
    fn test_inclusive_end_reaches_end_of_day() {
        let range = TimeRange::from_start_end_inclusive(700, LAST_MINUTE_OF_DAY, true).unwrap();
        assert_eq!(range, TimeRange::from_start_end(700, END_OF_DAY).unwrap());
        assert_eq!(range.duration(), 740);

        let exclusive = TimeRange::from_start_end_inclusive(700, LAST_MINUTE_OF_DAY, false).unwrap();
        assert_eq!(exclusive.end(), 1439);
    }

    #[test]
    fn test_overlaps_is_half_open() {
        let a = TimeRange::from_start_end(600, 700).unwrap();
        let b = TimeRange::from_start_end(700, 800).unwrap();
        let c = TimeRange::from_start_end(650, 750).unwrap();

        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_contains_point_and_range() {
        let range = TimeRange::from_start_end(600, 700).unwrap();
        assert!(range.contains(600));
        assert!(range.contains(699));
        assert!(!range.contains(700));

        assert!(range.contains_range(&TimeRange::from_start_end(610, 700).unwrap()));
        assert!(!range.contains_range(&TimeRange::from_start_end(590, 650).unwrap()));
    }

    #[test]
    fn test_orderings() {
        let early_long = TimeRange::from_start_end(0, 900).unwrap();
        let late_short = TimeRange::from_start_end(100, 200).unwrap();

        let mut by_start = vec![late_short, early_long];
        by_start.sort_by(TimeRange::order_by_start);
        assert_eq!(by_start, vec![early_long, late_short]);

        let mut by_end = vec![early_long, late_short];
        by_end.sort_by(TimeRange::order_by_end);
        assert_eq!(by_end, vec![late_short, early_long]);
    }

    #[test]
    fn test_clock_parsing_and_display() {
        assert_eq!(parse_clock("09:30").unwrap(), 570);
        assert_eq!(parse_clock("24:00").unwrap(), END_OF_DAY);
        assert!(parse_clock("24:30").is_err());
        assert!(parse_clock("9h30").is_err());

        let range = TimeRange::from_start_end(570, END_OF_DAY).unwrap();
        assert_eq!(range.to_string(), "09:30-24:00");
    }

    #[test]
    fn test_deserialize_accepts_minutes_clock_and_duration() {
        let a: TimeRange = serde_json::from_str(r#"{"start": 600, "end": 700}"#).unwrap();
        let b: TimeRange = serde_json::from_str(r#"{"start": "10:00", "end": "11:40"}"#).unwrap();
        let c: TimeRange = serde_json::from_str(r#"{"start": "10:00", "duration": 100}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);

        assert!(serde_json::from_str::<TimeRange>(r#"{"start": 700, "end": 600}"#).is_err());
        assert!(serde_json::from_str::<TimeRange>(r#"{"start": 700}"#).is_err());
    }

    #[test]
    fn test_serialize_as_minutes() {
        let range = TimeRange::from_start_end(600, 700).unwrap();
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            serde_json::json!({"start": 600, "end": 700})
        );
    }
}
