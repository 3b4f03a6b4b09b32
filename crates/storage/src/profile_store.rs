use std::sync::Arc;

use mentor_core::model::UserProfile;

use crate::repository::{KeyValueStore, StorageError, decode_envelope, encode_envelope};

/// Primary key for the versioned profile payload.
pub const PROFILE_KEY: &str = "mentor_user_profile";
/// Legacy key holding only the plain user name, kept for backward
/// compatibility with older payloads and written alongside every save.
pub const LEGACY_NAME_KEY: &str = "mentor_user_name";

const SCHEMA_VERSION: u32 = 1;

/// Reads and writes the user profile. Loading fails soft: a malformed or
/// stale payload degrades to the legacy name-only key, then to the default
/// profile.
#[derive(Clone)]
pub struct ProfileStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the persisted profile, or a default (empty-name) profile when
    /// nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only if the backend cannot be reached; payload
    /// corruption is not an error.
    pub async fn load(&self) -> Result<UserProfile, StorageError> {
        if let Some(raw) = self.kv.read(PROFILE_KEY).await? {
            if let Some(profile) = decode_envelope::<UserProfile>(&raw, SCHEMA_VERSION) {
                return Ok(profile);
            }
        }

        // Fall back to the legacy name-only entry.
        if let Some(name) = self.kv.read(LEGACY_NAME_KEY).await? {
            let name = name.trim();
            if !name.is_empty() {
                return Ok(UserProfile {
                    name: name.to_string(),
                    age: None,
                    preferences: Vec::new(),
                });
            }
        }

        Ok(UserProfile::default())
    }

    /// Persist the profile under the primary key and duplicate the trimmed
    /// name under the legacy key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either write fails.
    pub async fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let mut trimmed = profile.clone();
        trimmed.name = trimmed.name.trim().to_string();

        let payload = encode_envelope(SCHEMA_VERSION, &trimmed)?;
        self.kv.write(PROFILE_KEY, &payload).await?;
        self.kv.write(LEGACY_NAME_KEY, &trimmed.name).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;

    fn store() -> (ProfileStore, Arc<InMemoryStore>) {
        let kv = Arc::new(InMemoryStore::new());
        (ProfileStore::new(kv.clone()), kv)
    }

    #[tokio::test]
    async fn profile_round_trips_through_envelope() {
        let (profiles, _) = store();
        let profile = UserProfile::new("Ada ", Some("36".into()), vec!["Art".into()]).unwrap();
        profiles.save(&profile).await.unwrap();
        let loaded = profiles.load().await.unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn save_duplicates_name_under_legacy_key() {
        let (profiles, kv) = store();
        let profile = UserProfile::new("Ada", None, Vec::new()).unwrap();
        profiles.save(&profile).await.unwrap();
        assert_eq!(
            kv.read(LEGACY_NAME_KEY).await.unwrap().as_deref(),
            Some("Ada")
        );
    }

    #[tokio::test]
    async fn corrupt_payload_falls_back_to_legacy_name() {
        let (profiles, kv) = store();
        kv.write(PROFILE_KEY, "{definitely not json").await.unwrap();
        kv.write(LEGACY_NAME_KEY, "Grace").await.unwrap();

        let loaded = profiles.load().await.unwrap();
        assert_eq!(loaded.name, "Grace");
        assert_eq!(loaded.age, None);
        assert!(loaded.preferences.is_empty());
    }

    #[tokio::test]
    async fn stale_schema_version_degrades_to_default() {
        let (profiles, kv) = store();
        let stale = encode_envelope(99, &UserProfile::default()).unwrap();
        kv.write(PROFILE_KEY, &stale).await.unwrap();

        let loaded = profiles.load().await.unwrap();
        assert_eq!(loaded, UserProfile::default());
        assert!(!loaded.has_name());
    }

    #[tokio::test]
    async fn missing_keys_load_default_profile() {
        let (profiles, _) = store();
        let loaded = profiles.load().await.unwrap();
        assert_eq!(loaded, UserProfile::default());
    }
}
