//! Busy-interval collection.

use std::collections::HashSet;

use crate::event::Event;
use crate::time_range::TimeRange;

/// Ranges of every event attended by at least one of `attendees`.
///
/// Each qualifying event contributes its range once. Overlapping or duplicate
/// ranges from distinct events are kept; order follows `events`.
pub fn collect_busy(events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
    if attendees.is_empty() {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| event.is_attended_by_any(attendees))
        .map(|event| event.when)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::from_start_end(start, end).unwrap()
    }

    fn people(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_collects_only_relevant_events() {
        let events = vec![
            Event::new("Event 1", range(0, 60), ["A"]),
            Event::new("Event 2", range(60, 120), ["B"]),
            Event::new("Event 3", range(120, 180), ["A", "B"]),
        ];

        let busy = collect_busy(&events, &people(&["A"]));
        assert_eq!(busy, vec![range(0, 60), range(120, 180)]);
    }

    #[test]
    fn test_event_counted_once_with_many_matches() {
        let events = vec![Event::new("Sync", range(600, 630), ["A", "B", "C"])];
        let busy = collect_busy(&events, &people(&["A", "B", "C"]));
        assert_eq!(busy.len(), 1);
    }

    #[test]
    fn test_keeps_duplicates_from_distinct_events() {
        let events = vec![
            Event::new("One", range(600, 630), ["A"]),
            Event::new("Two", range(600, 630), ["A"]),
        ];
        assert_eq!(collect_busy(&events, &people(&["A"])).len(), 2);
    }

    #[test]
    fn test_empty_attendees_or_attendee_free_events() {
        let events = vec![
            Event::new("Lunch", range(720, 780), ["A"]),
            Event::new("Blocked", range(800, 900), Vec::<String>::new()),
        ];
        assert!(collect_busy(&events, &HashSet::new()).is_empty());
        assert_eq!(collect_busy(&events, &people(&["A"])), vec![range(720, 780)]);
    }
}
