//! Error types for the insight pipeline

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InsightError {
    #[error("Sentiment model error: {0}")]
    Sentiment(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl InsightError {
    pub fn sentiment(msg: impl Into<String>) -> Self {
        InsightError::Sentiment(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        InsightError::Upstream(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        InsightError::Timeout(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        InsightError::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        InsightError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        InsightError::Internal(msg.into())
    }
}

/// Result type alias for insight operations
pub type InsightResult<T> = Result<T, InsightError>;
