use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,
}

/// The learner's profile: a display name, an optional free-text age, and an
/// ordered list of unique interest tags.
///
/// A default profile (empty name) means onboarding has not completed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl UserProfile {
    /// Build a validated profile. The name is trimmed and must be non-empty;
    /// preferences are trimmed and deduplicated, preserving first occurrence
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the trimmed name is empty.
    pub fn new(
        name: impl Into<String>,
        age: Option<String>,
        preferences: Vec<String>,
    ) -> Result<Self, ProfileError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let age = age.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());

        let mut profile = Self {
            name,
            age,
            preferences: Vec::new(),
        };
        for preference in preferences {
            profile.add_preference(&preference);
        }
        Ok(profile)
    }

    /// True once onboarding has produced a named profile.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Add an interest tag. Trims input; duplicates (exact match) are ignored.
    /// Returns true if the tag was added.
    pub fn add_preference(&mut self, preference: &str) -> bool {
        let preference = preference.trim();
        if preference.is_empty() || self.preferences.iter().any(|p| p == preference) {
            return false;
        }
        self.preferences.push(preference.to_string());
        true
    }

    /// Remove an interest tag by exact match. Returns true if it was present.
    pub fn remove_preference(&mut self, preference: &str) -> bool {
        let before = self.preferences.len();
        self.preferences.retain(|p| p != preference);
        self.preferences.len() != before
    }

    /// Age label with a coarse age-group hint, matching the presentation
    /// used across the header and results views.
    #[must_use]
    pub fn age_display(&self) -> String {
        let Some(age) = self.age.as_deref() else {
            return "Not specified".to_string();
        };
        match age.parse::<u32>() {
            Ok(n) if n < 13 => format!("{age} (Elementary)"),
            Ok(n) if n < 18 => format!("{age} (Teen)"),
            _ => age.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            UserProfile::new("   ", None, Vec::new()),
            Err(ProfileError::EmptyName)
        );
    }

    #[test]
    fn trims_and_dedupes_preferences() {
        let profile = UserProfile::new(
            " Ada ",
            Some(" 36 ".into()),
            vec!["Art".into(), " Art ".into(), "Math".into(), "".into()],
        )
        .unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.age.as_deref(), Some("36"));
        assert_eq!(profile.preferences, vec!["Art", "Math"]);
    }

    #[test]
    fn add_preference_ignores_duplicates() {
        let mut profile = UserProfile::new("Ada", None, vec!["Art".into()]).unwrap();
        assert!(!profile.add_preference("Art"));
        assert!(profile.add_preference("Music"));
        assert_eq!(profile.preferences, vec!["Art", "Music"]);
    }

    #[test]
    fn age_display_groups_by_age() {
        let mut profile = UserProfile::new("Ada", Some("9".into()), Vec::new()).unwrap();
        assert_eq!(profile.age_display(), "9 (Elementary)");
        profile.age = Some("15".into());
        assert_eq!(profile.age_display(), "15 (Teen)");
        profile.age = Some("36".into());
        assert_eq!(profile.age_display(), "36");
        profile.age = None;
        assert_eq!(profile.age_display(), "Not specified");
    }
}
