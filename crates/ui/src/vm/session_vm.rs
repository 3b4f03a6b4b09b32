use mentor_core::model::{LearningSession, SessionId, recent_sessions};

use crate::vm::time_fmt::format_datetime;

/// Display shape for one stored session, shared by the sidebar browser and
/// the idle-state history cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCardVm {
    pub id: SessionId,
    pub topic: String,
    pub timestamp_str: String,
    pub level: String,
    pub style: String,
}

impl From<&LearningSession> for SessionCardVm {
    fn from(session: &LearningSession) -> Self {
        Self {
            id: session.id,
            topic: session.topic.clone(),
            timestamp_str: format_datetime(session.timestamp),
            level: session.assessment.level.as_str().to_string(),
            style: session.assessment.style.as_str().to_string(),
        }
    }
}

/// All sessions, in stored order (newest first).
#[must_use]
pub fn map_session_cards(sessions: &[LearningSession]) -> Vec<SessionCardVm> {
    sessions.iter().map(SessionCardVm::from).collect()
}

/// The idle-state history strip: newest three by timestamp.
#[must_use]
pub fn map_history_cards(sessions: &[LearningSession]) -> Vec<SessionCardVm> {
    recent_sessions(sessions, 3)
        .iter()
        .map(SessionCardVm::from)
        .collect()
}
