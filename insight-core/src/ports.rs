//! Contracts for the external capabilities the pipeline consumes
//!
//! Each port is object safe so implementations can be shared as
//! `Arc<dyn Port>` across request handlers and concurrent tasks.

use async_trait::async_trait;

use crate::asset::Ticker;
use crate::error::InsightError;
use crate::price::Price;
use crate::sentiment::SentimentResult;

/// Scores a piece of text for sentiment.
///
/// Implementations must return exactly one (top-ranked) result per input,
/// pass empty input through to the model, and be deterministic for the
/// same input.
#[async_trait]
pub trait SentimentPort: Send + Sync {
    async fn score(&self, text: &str) -> Result<SentimentResult, InsightError>;
}

/// Resolves the most recent close for a ticker.
///
/// Never fails: every provider problem is reported as [`Price::Unavailable`].
#[async_trait]
pub trait PricePort: Send + Sync {
    async fn latest_close(&self, ticker: Ticker) -> Price;
}

/// Supplies the latest headlines, most recent first.
///
/// Never fails: provider errors yield an empty list.
#[async_trait]
pub trait NewsPort: Send + Sync {
    async fn latest_headlines(&self) -> Vec<String>;
}
