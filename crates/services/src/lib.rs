#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod learning_service;
pub mod profile_service;
pub mod suggestion_service;

pub use mentor_core::Clock;

pub use api::{ApiConfig, HttpLearningApi, LearningApi};
pub use error::{ApiError, LearningServiceError, ProfileServiceError};
pub use learning_service::LearningService;
pub use profile_service::ProfileService;
pub use suggestion_service::{
    DEFAULT_COURSE_LIMIT, DEFAULT_TRENDING_LIMIT, FALLBACK_QUESTIONS, Suggestions,
    SuggestionService, fallback_courses, fallback_topics,
};
