use std::sync::Arc;

use tracing::warn;

use mentor_core::model::{Course, UserProfile};

use crate::api::LearningApi;

/// Default requested count for the trending-topics panel.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;
/// Default requested count for the recommended-courses panel.
pub const DEFAULT_COURSE_LIMIT: usize = 4;

/// Static suggested questions used when the trending endpoint is down.
pub const FALLBACK_QUESTIONS: [&str; 8] = [
    "What is machine learning and how does it work?",
    "Explain the basics of web development",
    "How does blockchain technology function?",
    "What are the fundamentals of data structures?",
    "Teach me about artificial intelligence",
    "What is quantum computing?",
    "Explain cloud computing architecture",
    "How does cybersecurity work?",
];

/// Suggestions for a panel, flagged when they came from local fallback data
/// instead of the backend (so the panel can show a low-severity warning).
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions<T> {
    pub items: Vec<T>,
    pub fallback: bool,
}

impl<T> Suggestions<T> {
    fn fetched(items: Vec<T>) -> Self {
        Self {
            items,
            fallback: false,
        }
    }

    fn fallback(items: Vec<T>) -> Self {
        Self {
            items,
            fallback: true,
        }
    }
}

/// Fetches data for both suggestion panels. Failures never propagate; each
/// fetcher degrades to its local fallback and flags the result.
#[derive(Clone)]
pub struct SuggestionService {
    api: Arc<dyn LearningApi>,
}

impl SuggestionService {
    #[must_use]
    pub fn new(api: Arc<dyn LearningApi>) -> Self {
        Self { api }
    }

    /// Trending topics for the user. Never fails: a backend error degrades
    /// to a local mix of interests and static questions.
    pub async fn trending(&self, profile: &UserProfile, limit: usize) -> Suggestions<String> {
        match self.api.trending_topics(limit, profile).await {
            Ok(topics) if !topics.is_empty() => Suggestions::fetched(topics),
            Ok(_) => {
                warn!("trending topics response was empty; using local suggestions");
                Suggestions::fallback(fallback_topics(&profile.preferences, limit))
            }
            Err(err) => {
                warn!(error = %err, "trending topics request failed; using local suggestions");
                Suggestions::fallback(fallback_topics(&profile.preferences, limit))
            }
        }
    }

    /// Recommended courses for the user and current topic. Never fails: a
    /// backend error degrades to the static course list.
    pub async fn courses(
        &self,
        profile: &UserProfile,
        current_topic: &str,
        limit: usize,
    ) -> Suggestions<Course> {
        match self
            .api
            .recommended_courses(&profile.preferences, current_topic, limit)
            .await
        {
            Ok(courses) if !courses.is_empty() => Suggestions::fetched(courses),
            Ok(_) => {
                warn!("recommended courses response was empty; using local fallback");
                Suggestions::fallback(fallback_courses(limit))
            }
            Err(err) => {
                warn!(error = %err, "recommended courses request failed; using local fallback");
                Suggestions::fallback(fallback_courses(limit))
            }
        }
    }
}

/// Local trending fallback: up to three of the user's interests first, then
/// static questions to reach `limit`.
#[must_use]
pub fn fallback_topics(preferences: &[String], limit: usize) -> Vec<String> {
    let mut topics: Vec<String> = preferences.iter().take(3).cloned().collect();
    topics.truncate(limit);
    let remaining = limit.saturating_sub(topics.len());
    topics.extend(
        FALLBACK_QUESTIONS
            .iter()
            .take(remaining)
            .map(|q| (*q).to_string()),
    );
    topics
}

/// Local course fallback, truncated to `limit`.
#[must_use]
pub fn fallback_courses(limit: usize) -> Vec<Course> {
    let mut courses = vec![
        Course {
            id: 1,
            title: "Complete Machine Learning & Data Science Bootcamp".into(),
            platform: "YouTube".into(),
            instructor: "freeCodeCamp.org".into(),
            duration: "11 hours".into(),
            rating: 4.8,
            url: "https://www.youtube.com/watch?v=cBBTWcHkVVY".into(),
            tags: vec![
                "Machine Learning".into(),
                "Data Science".into(),
                "Python".into(),
            ],
        },
        Course {
            id: 2,
            title: "JavaScript Crash Course for Beginners".into(),
            platform: "YouTube".into(),
            instructor: "Traversy Media".into(),
            duration: "1.5 hours".into(),
            rating: 4.9,
            url: "https://www.youtube.com/watch?v=hdI2bqOjy3c".into(),
            tags: vec![
                "JavaScript".into(),
                "Web Development".into(),
                "Programming".into(),
            ],
        },
        Course {
            id: 3,
            title: "Modern React with Redux".into(),
            platform: "Udemy".into(),
            instructor: "Stephen Grider".into(),
            duration: "52 hours".into(),
            rating: 4.7,
            url: "https://www.udemy.com/course/react-redux/".into(),
            tags: vec!["React".into(), "Redux".into(), "Web Development".into()],
        },
        Course {
            id: 4,
            title: "Physics 101: Introduction to Mechanics".into(),
            platform: "Coursera".into(),
            instructor: "University of California".into(),
            duration: "8 weeks".into(),
            rating: 4.6,
            url: "https://www.coursera.org/learn/physics-mechanics".into(),
            tags: vec!["Physics".into(), "Mechanics".into(), "Science".into()],
        },
    ];
    courses.truncate(limit);
    courses
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mentor_core::model::{Assessment, ResultsPayload};

    use crate::error::ApiError;

    struct FlakyApi {
        fail: bool,
        topics: Vec<String>,
        courses: Vec<Course>,
    }

    #[async_trait]
    impl LearningApi for FlakyApi {
        async fn assess(
            &self,
            _topic: &str,
            _profile: &UserProfile,
        ) -> Result<Assessment, ApiError> {
            unimplemented!("not used by suggestion tests")
        }

        async fn generate(
            &self,
            _topic: &str,
            _assessment: Assessment,
            _profile: &UserProfile,
        ) -> Result<ResultsPayload, ApiError> {
            unimplemented!("not used by suggestion tests")
        }

        async fn trending_topics(
            &self,
            limit: usize,
            _profile: &UserProfile,
        ) -> Result<Vec<String>, ApiError> {
            if self.fail {
                return Err(ApiError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY));
            }
            Ok(self.topics.iter().take(limit).cloned().collect())
        }

        async fn recommended_courses(
            &self,
            _preferences: &[String],
            _current_topic: &str,
            limit: usize,
        ) -> Result<Vec<Course>, ApiError> {
            if self.fail {
                return Err(ApiError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY));
            }
            Ok(self.courses.iter().take(limit).cloned().collect())
        }
    }

    fn failing_service() -> SuggestionService {
        SuggestionService::new(Arc::new(FlakyApi {
            fail: true,
            topics: Vec::new(),
            courses: Vec::new(),
        }))
    }

    #[tokio::test]
    async fn trending_failure_mixes_interests_with_static_questions() {
        let service = failing_service();
        let profile =
            UserProfile::new("Ada", None, vec!["Art".into(), "Math".into()]).unwrap();

        let suggestions = service.trending(&profile, 5).await;
        assert!(suggestions.fallback);
        assert_eq!(suggestions.items.len(), 5);
        assert_eq!(&suggestions.items[..2], &["Art", "Math"]);
        assert_eq!(suggestions.items[2], FALLBACK_QUESTIONS[0]);
        assert_eq!(suggestions.items[4], FALLBACK_QUESTIONS[2]);
    }

    #[tokio::test]
    async fn trending_failure_without_interests_uses_static_questions_only() {
        let service = failing_service();
        let suggestions = service.trending(&UserProfile::default(), 5).await;
        assert!(suggestions.fallback);
        assert_eq!(
            suggestions.items,
            FALLBACK_QUESTIONS[..5]
                .iter()
                .map(|q| (*q).to_string())
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn trending_success_passes_backend_topics_through() {
        let service = SuggestionService::new(Arc::new(FlakyApi {
            fail: false,
            topics: vec!["Rust ownership".into(), "Borrow checking".into()],
            courses: Vec::new(),
        }));
        let suggestions = service.trending(&UserProfile::default(), 5).await;
        assert!(!suggestions.fallback);
        assert_eq!(suggestions.items.len(), 2);
    }

    #[tokio::test]
    async fn course_failure_uses_static_list_capped_at_limit() {
        let service = failing_service();
        let suggestions = service.courses(&UserProfile::default(), "", 4).await;
        assert!(suggestions.fallback);
        assert_eq!(suggestions.items.len(), 4);
        assert_eq!(suggestions.items[0].platform, "YouTube");
    }

    #[test]
    fn fallback_topics_caps_interests_at_three() {
        let preferences: Vec<String> = ["a", "b", "c", "d"].iter().map(ToString::to_string).collect();
        let topics = fallback_topics(&preferences, 5);
        assert_eq!(topics.len(), 5);
        assert_eq!(&topics[..3], &["a", "b", "c"]);
        assert_eq!(topics[3], FALLBACK_QUESTIONS[0]);
    }
}
