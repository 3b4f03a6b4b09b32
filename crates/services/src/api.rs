use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use mentor_core::model::{Assessment, Course, ResultsPayload, UserProfile};

use crate::error::ApiError;

/// Where the learning backend lives.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `MENTOR_API_URL`, defaulting to the local development backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("MENTOR_API_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

/// The backend contract. Behind a trait so services and views can run
/// against a mock in tests.
#[async_trait]
pub trait LearningApi: Send + Sync {
    /// POST `/api/assess`: suggest a (level, style) pair for a topic.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a backend rejection.
    async fn assess(&self, topic: &str, profile: &UserProfile) -> Result<Assessment, ApiError>;

    /// POST `/api/learn`: generate materials for a topic under a confirmed
    /// assessment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a backend rejection.
    async fn generate(
        &self,
        topic: &str,
        assessment: Assessment,
        profile: &UserProfile,
    ) -> Result<ResultsPayload, ApiError>;

    /// POST `/api/trending_topics`: personalized topic suggestions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a backend rejection.
    async fn trending_topics(
        &self,
        limit: usize,
        profile: &UserProfile,
    ) -> Result<Vec<String>, ApiError>;

    /// POST `/api/recommended_courses`: course suggestions biased by
    /// interests and the current topic.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a backend rejection.
    async fn recommended_courses(
        &self,
        preferences: &[String],
        current_topic: &str,
        limit: usize,
    ) -> Result<Vec<Course>, ApiError>;
}

/// `reqwest` implementation of the backend contract.
#[derive(Clone)]
pub struct HttpLearningApi {
    client: Client,
    config: ApiConfig,
}

impl HttpLearningApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Backend errors carry `{"detail": "..."}`; surface that verbatim.
            if let Ok(body) = response.json::<ErrorBody>().await {
                if let Some(detail) = body.detail {
                    return Err(ApiError::Backend(detail));
                }
            }
            return Err(ApiError::HttpStatus(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LearningApi for HttpLearningApi {
    async fn assess(&self, topic: &str, profile: &UserProfile) -> Result<Assessment, ApiError> {
        let request = AssessRequest {
            topic: topic.trim(),
            user_age: profile.age.clone().unwrap_or_default(),
            user_preferences: &profile.preferences,
        };
        let response: AssessResponse = self.post_json("/api/assess", &request).await?;
        Ok(response.assessment)
    }

    async fn generate(
        &self,
        topic: &str,
        assessment: Assessment,
        profile: &UserProfile,
    ) -> Result<ResultsPayload, ApiError> {
        let request = LearnRequest {
            topic: topic.trim(),
            assessment,
            user_age: profile.age.clone().unwrap_or_default(),
            user_preferences: &profile.preferences,
        };
        self.post_json("/api/learn", &request).await
    }

    async fn trending_topics(
        &self,
        limit: usize,
        profile: &UserProfile,
    ) -> Result<Vec<String>, ApiError> {
        let request = TrendingRequest {
            limit,
            user_age: profile.age.clone().unwrap_or_default(),
            user_preferences: &profile.preferences,
        };
        let response: TrendingResponse = self.post_json("/api/trending_topics", &request).await?;
        Ok(response.topics)
    }

    async fn recommended_courses(
        &self,
        preferences: &[String],
        current_topic: &str,
        limit: usize,
    ) -> Result<Vec<Course>, ApiError> {
        let request = CoursesRequest {
            user_preferences: preferences,
            current_topic,
            limit,
        };
        let response: CoursesResponse = self
            .post_json("/api/recommended_courses", &request)
            .await?;
        Ok(response.courses)
    }
}

// Wire shapes. Field names follow the backend's camelCase contract.

#[derive(Debug, Serialize)]
struct AssessRequest<'a> {
    topic: &'a str,
    #[serde(rename = "userAge")]
    user_age: String,
    #[serde(rename = "userPreferences")]
    user_preferences: &'a [String],
}

#[derive(Debug, Deserialize)]
struct AssessResponse {
    assessment: Assessment,
}

#[derive(Debug, Serialize)]
struct LearnRequest<'a> {
    topic: &'a str,
    assessment: Assessment,
    #[serde(rename = "userAge")]
    user_age: String,
    #[serde(rename = "userPreferences")]
    user_preferences: &'a [String],
}

#[derive(Debug, Serialize)]
struct TrendingRequest<'a> {
    limit: usize,
    #[serde(rename = "userAge")]
    user_age: String,
    #[serde(rename = "userPreferences")]
    user_preferences: &'a [String],
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    topics: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CoursesRequest<'a> {
    #[serde(rename = "userPreferences")]
    user_preferences: &'a [String],
    #[serde(rename = "currentTopic")]
    current_topic: &'a str,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct CoursesResponse {
    courses: Vec<Course>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}
