use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response listing the selectable profile names, sorted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<String>,
}

/// Response for the relevant content endpoint
///
/// `relevant_content` is `None` when no profile carries the requested name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevantContentResponse {
    #[serde(rename = "selectedProfile")]
    pub selected_profile: String,
    #[serde(rename = "relevantContent")]
    pub relevant_content: Option<Vec<MatchResult>>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
