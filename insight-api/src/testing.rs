//! In-memory ports for router tests

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use insight_core::{
    InsightError, NewsPort, Price, PricePort, SentimentLabel, SentimentPort, SentimentResult,
    Ticker,
};
use insight_services::{InsightPipeline, InsightService, InsightServiceConfig};

use crate::{app, AppState};

/// "surge" → POSITIVE, "crash" → NEGATIVE, "model-error" fails, otherwise NEUTRAL
struct KeywordSentiment;

#[async_trait]
impl SentimentPort for KeywordSentiment {
    async fn score(&self, text: &str) -> Result<SentimentResult, InsightError> {
        if text.contains("model-error") {
            return Err(InsightError::sentiment("model crashed"));
        }
        let lowered = text.to_lowercase();
        let label = if lowered.contains("surge") {
            SentimentLabel::Positive
        } else if lowered.contains("crash") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        SentimentResult::new(label, 0.9)
    }
}

/// Only BTC-USD and SPY are priced
struct FixedPrices;

#[async_trait]
impl PricePort for FixedPrices {
    async fn latest_close(&self, ticker: Ticker) -> Price {
        match ticker {
            Ticker::BtcUsd => Price::Present(64000.0),
            Ticker::Spy => Price::Present(580.25),
            _ => Price::Unavailable,
        }
    }
}

struct FixedNews(Vec<String>);

#[async_trait]
impl NewsPort for FixedNews {
    async fn latest_headlines(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Full router backed by in-memory ports serving `headlines` as the live feed
pub fn test_app(headlines: &[&str]) -> Router {
    let pipeline = InsightPipeline::new(Arc::new(KeywordSentiment), Arc::new(FixedPrices));
    let news = FixedNews(headlines.iter().map(|h| h.to_string()).collect());
    let service = InsightService::new(Arc::new(news), pipeline, InsightServiceConfig::default());

    app(AppState {
        insight_service: Arc::new(service),
    })
}
