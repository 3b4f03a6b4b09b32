use serde::{Deserialize, Serialize};

/// A recommended external course, as returned by the backend or supplied by
/// the local fallback list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub platform: String,
    pub instructor: String,
    pub duration: String,
    pub rating: f64,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
