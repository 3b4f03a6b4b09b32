use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssessmentParseError {
    #[error("unknown knowledge level: {0}")]
    UnknownLevel(String),
    #[error("unknown learning style: {0}")]
    UnknownStyle(String),
}

/// Knowledge level suggested by the backend, editable by the user before
/// materials are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl AssessmentLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for AssessmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentLevel {
    type Err = AssessmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            other => Err(AssessmentParseError::UnknownLevel(other.to_string())),
        }
    }
}

/// Learning style suggested by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl LearningStyle {
    pub const ALL: [Self; 4] = [
        Self::Visual,
        Self::Auditory,
        Self::Reading,
        Self::Kinesthetic,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "Visual",
            Self::Auditory => "Auditory",
            Self::Reading => "Reading",
            Self::Kinesthetic => "Kinesthetic",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = AssessmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Visual" => Ok(Self::Visual),
            "Auditory" => Ok(Self::Auditory),
            "Reading" => Ok(Self::Reading),
            "Kinesthetic" => Ok(Self::Kinesthetic),
            other => Err(AssessmentParseError::UnknownStyle(other.to_string())),
        }
    }
}

/// The (level, style) pair describing how material should be tailored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub level: AssessmentLevel,
    pub style: LearningStyle,
}

impl Assessment {
    #[must_use]
    pub fn new(level: AssessmentLevel, style: LearningStyle) -> Self {
        Self { level, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_exact_backend_spelling() {
        for level in AssessmentLevel::ALL {
            assert_eq!(level.as_str().parse::<AssessmentLevel>().unwrap(), level);
        }
        assert!("beginner".parse::<AssessmentLevel>().is_err());
    }

    #[test]
    fn style_round_trips_exact_backend_spelling() {
        for style in LearningStyle::ALL {
            assert_eq!(style.as_str().parse::<LearningStyle>().unwrap(), style);
        }
        assert!("visual".parse::<LearningStyle>().is_err());
    }

    #[test]
    fn serde_uses_plain_variant_names() {
        let assessment = Assessment::new(AssessmentLevel::Advanced, LearningStyle::Reading);
        let json = serde_json::to_string(&assessment).unwrap();
        assert_eq!(json, r#"{"level":"Advanced","style":"Reading"}"#);
        let back: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assessment);
    }
}
