use serde::{Deserialize, Serialize};
use crate::models::domain::{ExplainedMatch, MatchScore};

/// Response for the generate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMatchesResponse {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "generationId")]
    pub generation_id: uuid::Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "attendeeCount")]
    pub attendee_count: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    /// Rows of the previous generation that this run replaced
    #[serde(rename = "replacedMatches")]
    pub replaced_matches: u64,
    pub matches: Vec<ExplainedMatch>,
}

/// Response for the stateless compute endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComputeMatchesResponse {
    Explained {
        #[serde(rename = "totalMatches")]
        total_matches: usize,
        matches: Vec<ExplainedMatch>,
    },
    Scored {
        #[serde(rename = "totalMatches")]
        total_matches: usize,
        matches: Vec<MatchScore>,
    },
}

/// Response for reading stored matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMatchesResponse {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub matches: Vec<ExplainedMatch>,
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
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
