use serde::{Deserialize, Serialize};

use crate::model::Assessment;

/// A curated external resource attached to a set of learning materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: String,
}

/// One multiple-choice quiz question. `correct_answer` indexes into
/// `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl QuizQuestion {
    /// The text of the correct option, if the index is in range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

/// Generated learning materials for one topic. Produced by the backend and
/// read-only on the client except for transient quiz-answer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    pub topic: String,
    pub assessment: Assessment,
    pub explanation: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_missing_lists() {
        let json = r##"{
            "topic": "Rust",
            "assessment": {"level": "Beginner", "style": "Visual"},
            "explanation": "# Rust\nA systems language."
        }"##;
        let payload: ResultsPayload = serde_json::from_str(json).unwrap();
        assert!(payload.resources.is_empty());
        assert!(payload.quiz.is_empty());
    }

    #[test]
    fn correct_option_guards_out_of_range_index() {
        let question = QuizQuestion {
            question: "?".into(),
            options: vec!["a".into(), "b".into()],
            correct_answer: 5,
        };
        assert_eq!(question.correct_option(), None);
    }
}
