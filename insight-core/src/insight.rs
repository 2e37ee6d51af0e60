//! The insight record produced for each headline

use serde::{Deserialize, Serialize};

use crate::asset::Ticker;
use crate::price::Price;
use crate::sentiment::{SentimentLabel, SentimentResult};

/// Sentiment, linked asset and latest price for one headline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Headline exactly as received
    pub headline: String,
    #[serde(rename = "sentiment")]
    pub sentiment_label: SentimentLabel,
    /// Model confidence in [0.0, 1.0]
    #[serde(rename = "confidence")]
    pub sentiment_confidence: f64,
    pub linked_asset: Ticker,
    /// Latest close of `linked_asset`, `null` when unavailable
    pub latest_price: Price,
}

impl Insight {
    pub fn new(
        headline: impl Into<String>,
        sentiment: SentimentResult,
        linked_asset: Ticker,
        latest_price: Price,
    ) -> Self {
        Self {
            headline: headline.into(),
            sentiment_label: sentiment.label,
            sentiment_confidence: sentiment.confidence,
            linked_asset,
            latest_price,
        }
    }
}
