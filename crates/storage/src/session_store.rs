use std::sync::Arc;

use mentor_core::model::{LearningSession, SessionId};

use crate::repository::{KeyValueStore, StorageError, decode_envelope, encode_envelope};

/// Key for the ordered session-history list.
pub const SESSIONS_KEY: &str = "mentor_sessions";

const SCHEMA_VERSION: u32 = 1;

/// Maintains the ordered list of past learning sessions. The list is
/// overwritten in full on every mutation and is not size-bounded here;
/// "recent sessions" views cap what they display, not what is stored.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the persisted list, or an empty list when absent or corrupt.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend cannot be reached.
    pub async fn load(&self) -> Result<Vec<LearningSession>, StorageError> {
        let Some(raw) = self.kv.read(SESSIONS_KEY).await? else {
            return Ok(Vec::new());
        };
        Ok(decode_envelope(&raw, SCHEMA_VERSION).unwrap_or_default())
    }

    /// Overwrite the stored list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn persist(&self, sessions: &[LearningSession]) -> Result<(), StorageError> {
        let payload = encode_envelope(SCHEMA_VERSION, &sessions)?;
        self.kv.write(SESSIONS_KEY, &payload).await
    }

    /// Prepend a session and persist the updated list, returning it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if loading or persisting fails.
    pub async fn add(&self, session: LearningSession) -> Result<Vec<LearningSession>, StorageError> {
        let mut sessions = self.load().await?;
        sessions.insert(0, session);
        self.persist(&sessions).await?;
        Ok(sessions)
    }

    /// Remove the session with the given id, persist, and return the updated
    /// list plus whether anything was removed. Relative order of the
    /// remaining sessions is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if loading or persisting fails.
    pub async fn delete(
        &self,
        id: SessionId,
    ) -> Result<(Vec<LearningSession>, bool), StorageError> {
        let mut sessions = self.load().await?;
        let before = sessions.len();
        sessions.retain(|session| session.id != id);
        let removed = sessions.len() != before;
        if removed {
            self.persist(&sessions).await?;
        }
        Ok((sessions, removed))
    }
}
