//! Meeting query engine.
//!
//! Applies the attendance policy on top of the busy collector and the free
//! window finder:
//!
//! 1. a meeting longer than a day never fits;
//! 2. an empty calendar leaves the whole day open;
//! 3. windows that suit mandatory and optional attendees win;
//! 4. a request with only optional attendees has nothing to fall back to;
//! 5. otherwise fall back to mandatory attendees alone.
//!
//! The guards run in exactly this order and the first that applies decides
//! the result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::busy::collect_busy;
use crate::event::Event;
use crate::free::FreeIntervalFinder;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, END_OF_DAY};

/// Which rule produced a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Requested duration exceeds the day
    DurationTooLong,
    /// Calendar had no events
    NoEvents,
    /// Windows work for mandatory and optional attendees
    Combined,
    /// Only optional attendees were requested and they share no window
    OptionalUnavailable,
    /// Windows work for mandatory attendees; optional ones were dropped
    MandatoryOnly,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DurationTooLong => "duration_too_long",
            Self::NoEvents => "no_events",
            Self::Combined => "combined",
            Self::OptionalUnavailable => "optional_unavailable",
            Self::MandatoryOnly => "mandatory_only",
        }
    }
}

/// Windows found for a request together with the rule that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub windows: Vec<TimeRange>,
    pub tier: Tier,
}

impl QueryOutcome {
    fn new(windows: Vec<TimeRange>, tier: Tier) -> Self {
        debug!(tier = tier.as_str(), windows = windows.len(), "meeting query resolved");
        Self { windows, tier }
    }
}

/// Stateless meeting search over a day's events.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingQuery;

impl MeetingQuery {
    pub fn new() -> Self {
        Self
    }

    /// All windows where `request` can be scheduled, sorted by start.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        self.query_detailed(events, request).windows
    }

    /// Like [`query`](Self::query), also reporting which rule decided.
    pub fn query_detailed(&self, events: &[Event], request: &MeetingRequest) -> QueryOutcome {
        if request.duration > END_OF_DAY {
            return QueryOutcome::new(Vec::new(), Tier::DurationTooLong);
        }
        if events.is_empty() {
            return QueryOutcome::new(vec![TimeRange::WHOLE_DAY], Tier::NoEvents);
        }

        let finder = FreeIntervalFinder::new(request.duration);
        let mandatory_busy = collect_busy(events, &request.mandatory);

        if !request.optional.is_empty() {
            let combined_busy = collect_busy(events, &request.everyone());
            let combined_free = finder.find(&combined_busy);
            if !combined_free.is_empty() {
                return QueryOutcome::new(combined_free, Tier::Combined);
            }
            if request.mandatory.is_empty() {
                return QueryOutcome::new(Vec::new(), Tier::OptionalUnavailable);
            }
            debug!(
                optional = request.optional.len(),
                "no window suits optional attendees, falling back to mandatory"
            );
        }

        QueryOutcome::new(finder.find(&mandatory_busy), Tier::MandatoryOnly)
    }
}

/// Convenience function running [`MeetingQuery::query`]
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    MeetingQuery::new().query(events, request)
}
