//! Error Types

use thiserror::Error;

/// Result type alias for insight operations
pub type Result<T> = std::result::Result<T, InsightError>;

/// Insight error types
#[derive(Error, Debug)]
pub enum InsightError {
    /// Reply generation failed (simulated or real backend fault)
    #[error("Reply generation failed: {0}")]
    ReplyGeneration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl InsightError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            InsightError::ReplyGeneration(_) => crate::session::APOLOGY_REPLY.into(),
            InsightError::Config(msg) => format!("Configuration problem: {}", msg),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

impl From<anyhow::Error> for InsightError {
    fn from(err: anyhow::Error) -> Self {
        InsightError::Other(err.to_string())
    }
}
