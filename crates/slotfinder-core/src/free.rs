//! Free window detection.
//!
//! Computes the whole day minus the union of busy intervals, keeping only the
//! runs long enough to hold a meeting. Busy intervals may arrive unsorted,
//! overlapping or nested; the sweep tracks the running maximum end of the
//! current busy cluster so a long interval swallows every later-starting
//! interval it covers.

use tracing::{debug, trace};

use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Finds free windows of at least a given length.
#[derive(Debug, Clone, Copy)]
pub struct FreeIntervalFinder {
    /// Minimum window length (in minutes)
    min_duration: u32,
}

impl FreeIntervalFinder {
    /// Create a finder that keeps windows of at least `min_duration` minutes
    pub fn new(min_duration: u32) -> Self {
        Self { min_duration }
    }

    pub fn min_duration(&self) -> u32 {
        self.min_duration
    }

    /// Find free windows around `busy`
    ///
    /// # Returns
    /// Windows sorted by start, pairwise separated by busy time, each at least
    /// `min_duration` long.
    pub fn find(&self, busy: &[TimeRange]) -> Vec<TimeRange> {
        if self.min_duration > END_OF_DAY {
            return Vec::new();
        }

        // Empty ranges cover no minute and must not split a window
        let mut sorted: Vec<TimeRange> = busy.iter().copied().filter(|r| !r.is_empty()).collect();
        if sorted.is_empty() {
            return vec![TimeRange::WHOLE_DAY];
        }
        sorted.sort_by(TimeRange::order_by_start);

        let mut windows = Vec::new();
        // End of the busy cluster swept so far; free time resumes here
        let mut cursor = START_OF_DAY;

        for interval in &sorted {
            if interval.start() > cursor {
                self.push_if_long_enough(&mut windows, cursor, interval.start());
            }
            cursor = cursor.max(interval.end());
        }

        // Closing window runs through the last minute of the day
        if cursor < END_OF_DAY {
            self.push_if_long_enough(&mut windows, cursor, END_OF_DAY);
        }

        debug!(
            busy = busy.len(),
            windows = windows.len(),
            min_duration = self.min_duration,
            "free window sweep finished"
        );
        windows
    }

    fn push_if_long_enough(&self, windows: &mut Vec<TimeRange>, start: u32, end: u32) {
        let window = TimeRange::spanning(start, end);
        if window.duration() >= self.min_duration {
            trace!(%window, "free window");
            windows.push(window);
        }
    }
}

/// Convenience function to find free windows of at least `min_duration`
pub fn find_free_windows(busy: &[TimeRange], min_duration: u32) -> Vec<TimeRange> {
    FreeIntervalFinder::new(min_duration).find(busy)
}
