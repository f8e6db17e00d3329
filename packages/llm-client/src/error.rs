//! Error types for LLM completion clients

use thiserror::Error;

/// Errors that can occur when talking to a completion provider
#[derive(Error, Debug)]
pub enum LlmError {
    /// API key is missing or empty
    #[error("API key is required for the completion provider")]
    MissingApiKey,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize/deserialize JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider returned an error status
    #[error("Completion API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Request timeout
    #[error("Request to the completion provider timed out")]
    Timeout,
}

/// Result type for completion operations
pub type LlmResult<T> = Result<T, LlmError>;
