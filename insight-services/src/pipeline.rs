//! Headline-to-insight pipeline
//!
//! For each headline the sentiment port and the asset mapper run
//! concurrently; the mapped ticker is then priced through the price port and
//! the pieces are assembled into an [`Insight`]. Batches are processed with a
//! bounded number of headlines in flight and keep their input order.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use insight_core::{
    AssetMapper, Insight, InsightError, InsightResult, Price, PricePort, SentimentPort,
    SentimentResult, Ticker,
};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Configuration for the insight pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum number of headlines processed at once in a batch
    pub max_concurrency: usize,
    /// Upper bound on a single sentiment call
    pub sentiment_timeout: Duration,
    /// Upper bound on a single price lookup
    pub price_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            sentiment_timeout: Duration::from_secs(20),
            price_timeout: Duration::from_secs(10),
        }
    }
}

/// Builds insights from headlines using injected ports
#[derive(Clone)]
pub struct InsightPipeline {
    sentiment: Arc<dyn SentimentPort>,
    prices: Arc<dyn PricePort>,
    mapper: AssetMapper,
    config: PipelineConfig,
}

impl InsightPipeline {
    /// Create a pipeline with the default mapper and config
    pub fn new(sentiment: Arc<dyn SentimentPort>, prices: Arc<dyn PricePort>) -> Self {
        Self::with_config(sentiment, prices, PipelineConfig::default())
    }

    /// Create a pipeline with a custom config
    pub fn with_config(
        sentiment: Arc<dyn SentimentPort>,
        prices: Arc<dyn PricePort>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            sentiment,
            prices,
            mapper: AssetMapper::default(),
            config,
        }
    }

    /// Replace the asset mapper
    pub fn with_mapper(mut self, mapper: AssetMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the insight for one headline
    ///
    /// Fails only when sentiment scoring fails or times out. Price problems
    /// degrade to [`Price::Unavailable`].
    #[instrument(skip(self, headline), fields(headline = %headline))]
    pub async fn build_insight(&self, headline: &str) -> InsightResult<Insight> {
        let linked = async {
            let ticker = self.link_asset(headline);
            (ticker, self.lookup_price(ticker).await)
        };

        let (sentiment, (ticker, price)) = tokio::join!(self.score(headline), linked);
        let sentiment = sentiment?;

        debug!(
            "{} ({:.3}) -> {} @ {:?}",
            sentiment.label,
            sentiment.confidence,
            ticker,
            price.value()
        );

        Ok(Insight::new(headline, sentiment, ticker, price))
    }

    /// Build one insight per headline, in input order
    ///
    /// Each entry succeeds or fails independently of the others.
    #[instrument(skip(self, headlines), fields(count = headlines.len()))]
    pub async fn build_insights<S>(&self, headlines: &[S]) -> Vec<InsightResult<Insight>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<InsightResult<Insight>> = stream::iter(headlines)
            .map(|headline| self.build_insight(headline.as_ref()))
            .boxed()
            .buffered(self.config.max_concurrency.max(1))
            .collect()
            .await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            "Built {} insights ({} failed)",
            results.len() - failed,
            failed
        );

        results
    }

    fn link_asset(&self, headline: &str) -> Ticker {
        match self.mapper.matched_rule(headline) {
            Some((rule, keyword)) => {
                debug!("Matched keyword '{}' -> {}", keyword, rule.ticker);
                rule.ticker
            }
            None => self.mapper.fallback(),
        }
    }

    async fn score(&self, headline: &str) -> InsightResult<SentimentResult> {
        match timeout(self.config.sentiment_timeout, self.sentiment.score(headline)).await {
            Ok(result) => result,
            Err(_) => Err(InsightError::timeout(format!(
                "sentiment scoring exceeded {:?}",
                self.config.sentiment_timeout
            ))),
        }
    }

    async fn lookup_price(&self, ticker: Ticker) -> Price {
        match timeout(self.config.price_timeout, self.prices.latest_close(ticker)).await {
            Ok(price) => price,
            Err(_) => {
                warn!(
                    "Price lookup for {} exceeded {:?}",
                    ticker, self.config.price_timeout
                );
                Price::Unavailable
            }
        }
    }
}
