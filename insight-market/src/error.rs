//! Error types for price lookups

use insight_core::InsightError;
use thiserror::Error;
use yfinance_rs::YfError;

/// Errors that can occur while fetching daily history
#[derive(Debug, Error)]
pub enum PriceError {
    /// Yahoo Finance request or payload failure
    #[error("Provider error: {0}")]
    Provider(#[from] YfError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<PriceError> for InsightError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::InvalidConfig(msg) => InsightError::config(msg),
            other => InsightError::upstream(other.to_string()),
        }
    }
}
