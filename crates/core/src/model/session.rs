use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Assessment, ResultsPayload};

/// Unique identifier for a learning session, derived from the creation
/// timestamp in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(i64);

impl SessionId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed learning interaction: a topic plus its confirmed assessment
/// and the generated materials. Immutable after creation except deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSession {
    pub id: SessionId,
    pub topic: String,
    pub timestamp: DateTime<Utc>,
    pub assessment: Assessment,
    pub results: ResultsPayload,
}

impl LearningSession {
    /// Create a session stamped at `now`; the id is derived from the same
    /// instant so insertion order and id order agree.
    #[must_use]
    pub fn new(
        topic: impl Into<String>,
        assessment: Assessment,
        results: ResultsPayload,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SessionId::new(now.timestamp_millis()),
            topic: topic.into(),
            timestamp: now,
            assessment,
            results,
        }
    }
}

/// The most recent sessions for display: a sorted copy (timestamp
/// descending), truncated to `cap`. The underlying store order is untouched.
#[must_use]
pub fn recent_sessions(sessions: &[LearningSession], cap: usize) -> Vec<LearningSession> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(cap);
    sorted
}
