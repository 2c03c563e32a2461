//! Meeting requests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// What the caller wants to schedule: a duration and who should come.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Meeting length in minutes
    pub duration: u32,
    #[serde(default)]
    pub mandatory: HashSet<String>,
    #[serde(default)]
    pub optional: HashSet<String>,
}

impl MeetingRequest {
    /// Create a request with only mandatory attendees
    pub fn new<I, S>(duration: u32, mandatory: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: HashSet::new(),
        }
    }

    /// Add optional attendees
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(optional.into_iter().map(Into::into));
        self
    }

    /// Mandatory and optional attendees together.
    pub fn everyone(&self) -> HashSet<String> {
        self.mandatory.union(&self.optional).cloned().collect()
    }
}
