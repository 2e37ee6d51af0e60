//! Error types for sentiment scoring

use insight_core::InsightError;
use thiserror::Error;

/// Errors that can occur while scoring text
#[derive(Debug, Error)]
pub enum SentimentError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Inference API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse the model output
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Model returned no label/score pairs
    #[error("Model returned an empty distribution")]
    EmptyDistribution,

    /// Model returned a label outside the known vocabulary
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// Model returned a score outside [0, 1]
    #[error("Score out of range: {0}")]
    ScoreOutOfRange(f64),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<SentimentError> for InsightError {
    fn from(err: SentimentError) -> Self {
        match err {
            SentimentError::InvalidConfig(msg) => InsightError::config(msg),
            other => InsightError::sentiment(other.to_string()),
        }
    }
}
