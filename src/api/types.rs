//! API request and response types

use serde::{Deserialize, Serialize};

/// Request to run a query
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    #[serde(default = "default_workout_levels")]
    pub workout_levels: Vec<String>,
    #[serde(default = "default_dietary_preferences")]
    pub dietary_preferences: Vec<String>,
    /// Backend key for this request only
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_workout_levels() -> Vec<String> {
    vec!["Beginner".to_string()]
}

fn default_dietary_preferences() -> Vec<String> {
    vec!["Low-carb".to_string()]
}

/// Response for a successful query
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Question actually sent to the agent
    pub question: String,
    /// Full trace of completions and observations
    pub response: String,
}

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub configured: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
