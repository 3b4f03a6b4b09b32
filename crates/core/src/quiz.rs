use std::collections::{HashMap, HashSet};

use crate::model::QuizQuestion;

/// Transient state for one quiz rendering. Never persisted; rebuilt from
/// scratch whenever the underlying results change.
///
/// Answers are stored as the chosen option index formatted as a string, the
/// shape the selection controls produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    answers: HashMap<usize, String>,
    locked: HashSet<usize>,
    show_results: bool,
    score: Option<f64>,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a question. The first selection locks the
    /// question permanently; later attempts are no-ops. Returns true if the
    /// answer was recorded.
    pub fn select(&mut self, question_index: usize, option_index: usize) -> bool {
        if self.locked.contains(&question_index) {
            return false;
        }
        self.answers
            .insert(question_index, option_index.to_string());
        self.locked.insert(question_index);
        true
    }

    #[must_use]
    pub fn answer(&self, question_index: usize) -> Option<&str> {
        self.answers.get(&question_index).map(String::as_str)
    }

    #[must_use]
    pub fn is_locked(&self, question_index: usize) -> bool {
        self.locked.contains(&question_index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn all_answered(&self, total_questions: usize) -> bool {
        self.answers.len() == total_questions
    }

    #[must_use]
    pub fn show_results(&self) -> bool {
        self.show_results
    }

    /// Score as a percentage, set by `check`.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Score rounded to a whole percent for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score_percent(&self) -> Option<u32> {
        self.score.map(|s| s.round() as u32)
    }

    /// A score of 70% or more gets the "pass" presentation. Cosmetic only.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score.is_some_and(|s| s >= 70.0)
    }

    #[must_use]
    pub fn is_correct(&self, question_index: usize, question: &QuizQuestion) -> bool {
        self.answer(question_index) == Some(question.correct_answer.to_string().as_str())
    }

    /// Compute and reveal the score. Only acts once every question has an
    /// answer; returns the score when computed.
    pub fn check(&mut self, quiz: &[QuizQuestion]) -> Option<f64> {
        if quiz.is_empty() || !self.all_answered(quiz.len()) {
            return None;
        }
        let correct = quiz
            .iter()
            .enumerate()
            .filter(|(index, question)| self.is_correct(*index, question))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let score = (correct as f64 / quiz.len() as f64) * 100.0;
        self.score = Some(score);
        self.show_results = true;
        Some(score)
    }

    /// Drop all answers, locks, and the score. Called when the results
    /// identity changes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion {
            question: "?".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: correct,
        }
    }

    #[test]
    fn first_selection_locks_the_question() {
        let mut state = QuizState::new();
        assert!(state.select(0, 1));
        assert!(state.is_locked(0));
        assert!(!state.select(0, 2));
        assert_eq!(state.answer(0), Some("1"));
    }

    #[test]
    fn reset_clears_locks_and_answers() {
        let mut state = QuizState::new();
        state.select(0, 1);
        state.check(&[question(1)]);
        state.reset();
        assert!(!state.is_locked(0));
        assert_eq!(state.answer(0), None);
        assert_eq!(state.score(), None);
        assert!(!state.show_results());
        assert!(state.select(0, 2));
    }

    #[test]
    fn check_requires_every_question_answered() {
        let quiz = vec![question(0), question(1)];
        let mut state = QuizState::new();
        state.select(0, 0);
        assert_eq!(state.check(&quiz), None);
        assert!(!state.show_results());
        state.select(1, 1);
        assert_eq!(state.check(&quiz), Some(100.0));
        assert!(state.show_results());
    }

    #[test]
    fn all_correct_scores_exactly_100_and_all_wrong_0() {
        let quiz = vec![question(0), question(1), question(2)];

        let mut state = QuizState::new();
        for (index, q) in quiz.iter().enumerate() {
            state.select(index, q.correct_answer);
        }
        assert_eq!(state.check(&quiz), Some(100.0));
        assert_eq!(state.score_percent(), Some(100));
        assert!(state.passed());

        let mut state = QuizState::new();
        for (index, q) in quiz.iter().enumerate() {
            state.select(index, (q.correct_answer + 1) % q.options.len());
        }
        assert_eq!(state.check(&quiz), Some(0.0));
        assert_eq!(state.score_percent(), Some(0));
        assert!(!state.passed());
    }

    #[test]
    fn partial_score_rounds_to_nearest_whole_percent() {
        let quiz = vec![question(0), question(0), question(0)];
        let mut state = QuizState::new();
        state.select(0, 0);
        state.select(1, 1);
        state.select(2, 1);
        state.check(&quiz);
        assert_eq!(state.score_percent(), Some(33));
    }

    #[test]
    fn two_question_half_right_scores_50() {
        // Backend says correct answers are options 1 and 0; the user picks
        // option 1 for both.
        let quiz = vec![question(1), question(0)];
        let mut state = QuizState::new();
        state.select(0, 1);
        state.select(1, 1);
        assert_eq!(state.check(&quiz), Some(50.0));
        assert_eq!(state.score_percent(), Some(50));
        assert!(!state.passed());
    }
}
