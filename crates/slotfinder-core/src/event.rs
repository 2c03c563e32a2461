//! Calendar events as seen by the meeting search.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An event on the day's calendar and the people attending it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub when: TimeRange,
    #[serde(default)]
    pub attendees: HashSet<String>,
}

impl Event {
    /// Create a new event
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any of `people` attends this event.
    pub fn is_attended_by_any(&self, people: &HashSet<String>) -> bool {
        self.attendees.iter().any(|attendee| people.contains(attendee))
    }
}
