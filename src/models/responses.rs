use serde::{Deserialize, Serialize};

/// Response after a successful answer submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswersResponse {
    pub success: bool,
    pub participant_id: i64,
    pub message: String,
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
