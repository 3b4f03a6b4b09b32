use mentor_core::model::UserProfile;
use storage::ProfileStore;

use crate::error::ProfileServiceError;

/// Loads and saves the user profile, validating edits before they reach
/// storage.
#[derive(Clone)]
pub struct ProfileService {
    store: ProfileStore,
}

impl ProfileService {
    #[must_use]
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    /// Load the persisted profile; corrupt payloads degrade to defaults
    /// inside the store.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Storage` if the store is unreachable.
    pub async fn load(&self) -> Result<UserProfile, ProfileServiceError> {
        Ok(self.store.load().await?)
    }

    /// Validate and persist a profile edit (onboarding or profile modal).
    /// Returns the normalized profile that was saved.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Profile` for an empty name, or
    /// `ProfileServiceError::Storage` if persisting fails.
    pub async fn update(
        &self,
        name: &str,
        age: Option<String>,
        preferences: Vec<String>,
    ) -> Result<UserProfile, ProfileServiceError> {
        let profile = UserProfile::new(name, age, preferences)?;
        self.store.save(&profile).await?;
        Ok(profile)
    }
}
