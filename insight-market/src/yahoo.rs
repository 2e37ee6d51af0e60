//! Yahoo Finance latest-close lookups
//!
//! The lookup window is a `5d` range at a `1d` interval: the last five
//! trading sessions as Yahoo reports them, in exchange-local session terms
//! and the listing currency. No currency or timezone normalization is
//! applied. Bars without a full OHLC row are dropped by the history fetch,
//! so the last remaining bar is the most recent session that actually closed.

use std::time::Duration;

use async_trait::async_trait;
use insight_core::{Price, PricePort, Ticker};
use tracing::{debug, instrument, warn};
use url::Url;
use yfinance_rs::core::conversions::money_to_f64;
use yfinance_rs::{HistoryBuilder, Interval, Range, YfClient};

use crate::error::PriceError;

/// Configuration for the history client
#[derive(Debug, Clone)]
pub struct YahooChartConfig {
    /// Scheme and host serving `v8/finance/chart`; `None` uses Yahoo's own
    pub base_url: Option<String>,
    /// Trailing window requested from the provider
    pub range: Range,
    /// Bar interval within the window
    pub interval: Interval,
    pub request_timeout: Duration,
}

impl Default for YahooChartConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            range: Range::D5,
            interval: Interval::D1,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Yahoo Finance daily history client
pub struct YahooChartClient {
    client: YfClient,
    config: YahooChartConfig,
}

impl YahooChartClient {
    /// Create a new history client
    pub fn new(config: YahooChartConfig) -> Result<Self, PriceError> {
        let mut builder = YfClient::builder().timeout(config.request_timeout);
        if let Some(base) = &config.base_url {
            builder = builder.base_chart(chart_base(base)?);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Fetch the most recent close for `symbol`
    ///
    /// `Ok(None)` means the provider answered but the window held no closes.
    #[instrument(skip(self))]
    pub async fn fetch_latest_close(&self, symbol: &str) -> Result<Option<f64>, PriceError> {
        let candles = HistoryBuilder::new(&self.client, symbol)
            .range(self.config.range)
            .interval(self.config.interval)
            .fetch()
            .await?;

        debug!("{} bars in window for {}", candles.len(), symbol);

        Ok(candles
            .iter()
            .rev()
            .map(|candle| money_to_f64(&candle.close))
            .find(|close| close.is_finite()))
    }
}

fn chart_base(base: &str) -> Result<Url, PriceError> {
    let url = Url::parse(&format!("{}/v8/finance/chart/", base.trim_end_matches('/')))
        .map_err(|e| PriceError::InvalidConfig(format!("{}: {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(PriceError::InvalidConfig(format!("{} cannot be a base", base)));
    }
    Ok(url)
}

#[async_trait]
impl PricePort for YahooChartClient {
    async fn latest_close(&self, ticker: Ticker) -> Price {
        match self.fetch_latest_close(ticker.symbol()).await {
            Ok(Some(close)) => {
                debug!("{} closed at {}", ticker, close);
                Price::from_close(close)
            }
            Ok(None) => {
                debug!("No closes in window for {}", ticker);
                Price::Unavailable
            }
            Err(e) => {
                warn!("Price lookup for {} failed: {}", ticker, e);
                Price::Unavailable
            }
        }
    }
}
