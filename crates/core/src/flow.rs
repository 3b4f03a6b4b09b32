use thiserror::Error;

use crate::model::{Assessment, LearningSession, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("Please enter a topic to learn about")]
    EmptyTopic,
    #[error("unexpected transition from {state}")]
    InvalidTransition { state: &'static str },
}

/// The assessment flow as an explicit state machine.
///
/// ```text
/// Idle -> AwaitingAssessment -> AssessmentReady -> AwaitingResults -> ResultsReady
/// ```
///
/// `Idle` is reachable from anywhere via `reset`, and from the two awaiting
/// states on request failure. Selecting a stored session short-circuits
/// straight into `ResultsReady`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LearnFlow {
    #[default]
    Idle,
    AwaitingAssessment {
        topic: String,
    },
    AssessmentReady {
        topic: String,
        assessment: Assessment,
    },
    AwaitingResults {
        topic: String,
        assessment: Assessment,
    },
    ResultsReady {
        session: LearningSession,
    },
}

impl LearnFlow {
    #[must_use]
    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingAssessment { .. } => "AwaitingAssessment",
            Self::AssessmentReady { .. } => "AssessmentReady",
            Self::AwaitingResults { .. } => "AwaitingResults",
            Self::ResultsReady { .. } => "ResultsReady",
        }
    }

    /// True while a backend request is logically in flight; the UI disables
    /// submission triggers in these states.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::AwaitingAssessment { .. } | Self::AwaitingResults { .. }
        )
    }

    #[must_use]
    pub fn current_session(&self) -> Option<&LearningSession> {
        match self {
            Self::ResultsReady { session } => Some(session),
            _ => None,
        }
    }

    /// Submit a topic, entering `AwaitingAssessment`. Valid from any state
    /// (a new search implicitly resets). An empty topic is rejected locally
    /// and the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::EmptyTopic` if the trimmed topic is empty.
    pub fn submit_topic(&mut self, topic: &str) -> Result<(), FlowError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(FlowError::EmptyTopic);
        }
        *self = Self::AwaitingAssessment {
            topic: topic.to_string(),
        };
        Ok(())
    }

    /// The backend returned a suggestion. Shows it for user edit; no
    /// auto-advance to materials.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidTransition` unless awaiting an assessment.
    pub fn assessment_received(&mut self, assessment: Assessment) -> Result<(), FlowError> {
        match self {
            Self::AwaitingAssessment { topic } => {
                *self = Self::AssessmentReady {
                    topic: std::mem::take(topic),
                    assessment,
                };
                Ok(())
            }
            other => Err(FlowError::InvalidTransition {
                state: other.state_name(),
            }),
        }
    }

    /// The user confirmed the (possibly edited) assessment.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidTransition` unless an assessment is ready.
    pub fn confirm(&mut self, assessment: Assessment) -> Result<(), FlowError> {
        match self {
            Self::AssessmentReady { topic, .. } => {
                *self = Self::AwaitingResults {
                    topic: std::mem::take(topic),
                    assessment,
                };
                Ok(())
            }
            other => Err(FlowError::InvalidTransition {
                state: other.state_name(),
            }),
        }
    }

    /// Materials arrived and a session record was created.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidTransition` unless results were awaited.
    pub fn results_received(&mut self, session: LearningSession) -> Result<(), FlowError> {
        match self {
            Self::AwaitingResults { .. } => {
                *self = Self::ResultsReady { session };
                Ok(())
            }
            other => Err(FlowError::InvalidTransition {
                state: other.state_name(),
            }),
        }
    }

    /// A request failed: back to `Idle`, results cleared.
    pub fn fail(&mut self) {
        *self = Self::Idle;
    }

    /// Explicit reset (new-topic action or session deletion).
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Load a stored session directly, without contacting the backend.
    pub fn select_session(&mut self, session: LearningSession) {
        *self = Self::ResultsReady { session };
    }

    /// A stored session was deleted. Returns to `Idle` if that session was
    /// being displayed; any other state is untouched. Returns true if the
    /// flow reset.
    pub fn session_deleted(&mut self, id: SessionId) -> bool {
        if self
            .current_session()
            .is_some_and(|session| session.id == id)
        {
            *self = Self::Idle;
            return true;
        }
        false
    }
}
