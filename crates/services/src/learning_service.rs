use std::sync::Arc;

use mentor_core::Clock;
use mentor_core::model::{Assessment, LearningSession, SessionId, UserProfile};
use storage::SessionStore;

use crate::api::LearningApi;
use crate::error::LearningServiceError;

/// Orchestrates the assessment flow against the backend and records
/// completed sessions in local history.
#[derive(Clone)]
pub struct LearningService {
    clock: Clock,
    api: Arc<dyn LearningApi>,
    sessions: SessionStore,
}

impl LearningService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn LearningApi>, sessions: SessionStore) -> Self {
        Self {
            clock,
            api,
            sessions,
        }
    }

    /// Ask the backend to suggest a (level, style) pair for a topic. The
    /// suggestion is shown for user edit; nothing is persisted here.
    ///
    /// # Errors
    ///
    /// Returns `LearningServiceError::Api` on request failure.
    pub async fn request_assessment(
        &self,
        topic: &str,
        profile: &UserProfile,
    ) -> Result<Assessment, LearningServiceError> {
        Ok(self.api.assess(topic, profile).await?)
    }

    /// Fetch generated materials for a confirmed assessment, build a session
    /// record stamped with the service clock, and prepend it to history.
    ///
    /// Returns the new session together with the updated history list.
    ///
    /// # Errors
    ///
    /// Returns `LearningServiceError` if the request or the history write
    /// fails; nothing is persisted on failure.
    pub async fn generate_materials(
        &self,
        topic: &str,
        assessment: Assessment,
        profile: &UserProfile,
    ) -> Result<(LearningSession, Vec<LearningSession>), LearningServiceError> {
        let results = self.api.generate(topic, assessment, profile).await?;
        let session = LearningSession::new(topic.trim(), assessment, results, self.clock.now());
        let history = self.sessions.add(session.clone()).await?;
        Ok((session, history))
    }

    /// Load the stored session history (insertion order, newest first).
    ///
    /// # Errors
    ///
    /// Returns `LearningServiceError::Storage` if the store is unreachable.
    pub async fn sessions(&self) -> Result<Vec<LearningSession>, LearningServiceError> {
        Ok(self.sessions.load().await?)
    }

    /// Delete one session from history. Returns the updated list and whether
    /// the id was present.
    ///
    /// # Errors
    ///
    /// Returns `LearningServiceError::Storage` if the store write fails.
    pub async fn delete_session(
        &self,
        id: SessionId,
    ) -> Result<(Vec<LearningSession>, bool), LearningServiceError> {
        Ok(self.sessions.delete(id).await?)
    }
}
