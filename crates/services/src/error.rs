//! Shared error types for the services crate.

use thiserror::Error;

use mentor_core::model::ProfileError;
use storage::repository::StorageError;

/// Fallback message shown when the backend gives no detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors from the backend HTTP API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend rejected the request and supplied a human-readable
    /// `detail` message.
    #[error("{0}")]
    Backend(String),
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// The user-facing message: the backend's `detail` when present, else a
    /// generic failure message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(detail) => detail.clone(),
            Self::HttpStatus(_) | Self::Http(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Errors emitted by `LearningService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LearningServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LearningServiceError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Storage(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Errors emitted by `ProfileService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
