//! In-memory ports for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use insight_core::{
    InsightError, NewsPort, Price, PricePort, SentimentLabel, SentimentPort, SentimentResult,
    Ticker,
};

/// Scores by keyword: "surge" → POSITIVE, "crash" → NEGATIVE, otherwise NEUTRAL.
/// Text containing "model-error" fails; text containing "slow" sleeps first.
#[derive(Default)]
pub struct ScriptedSentiment {
    pub delay: Duration,
    in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
}

impl ScriptedSentiment {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }
}

#[async_trait]
impl SentimentPort for ScriptedSentiment {
    async fn score(&self, text: &str) -> Result<SentimentResult, InsightError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if text.contains("slow") {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

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

/// Fixed price table; records every lookup. Missing tickers are unavailable.
#[derive(Default)]
pub struct TablePrices {
    pub(crate) prices: HashMap<Ticker, Price>,
    pub stall: Option<Ticker>,
    pub lookups: Mutex<Vec<Ticker>>,
}

impl TablePrices {
    pub fn new(entries: &[(Ticker, f64)]) -> Self {
        Self {
            prices: entries
                .iter()
                .map(|(t, p)| (*t, Price::Present(*p)))
                .collect(),
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<Ticker> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl PricePort for TablePrices {
    async fn latest_close(&self, ticker: Ticker) -> Price {
        self.lookups.lock().unwrap().push(ticker);
        if self.stall == Some(ticker) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.prices.get(&ticker).copied().unwrap_or(Price::Unavailable)
    }
}

/// Returns a fixed list of headlines, optionally after a delay
#[derive(Default)]
pub struct StaticNews {
    pub headlines: Vec<String>,
    pub delay: Duration,
}

impl StaticNews {
    pub fn new(headlines: &[&str]) -> Self {
        Self {
            headlines: headlines.iter().map(|h| h.to_string()).collect(),
            delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl NewsPort for StaticNews {
    async fn latest_headlines(&self) -> Vec<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.headlines.clone()
    }
}
