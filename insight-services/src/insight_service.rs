//! Insight Service
//!
//! Entry points used by the HTTP layer: score the current live headlines, or
//! score a single caller-supplied headline.

use std::sync::Arc;
use std::time::Duration;

use insight_core::{Insight, InsightResult, NewsPort};
use tokio::time::timeout;
use tracing::{error, info, instrument, warn};

use crate::pipeline::InsightPipeline;

/// Configuration for InsightService
#[derive(Debug, Clone)]
pub struct InsightServiceConfig {
    /// Upper bound on fetching the live headline batch
    pub news_timeout: Duration,
}

impl Default for InsightServiceConfig {
    fn default() -> Self {
        Self {
            news_timeout: Duration::from_secs(10),
        }
    }
}

/// Service for building insights from live or supplied headlines
pub struct InsightService {
    news: Arc<dyn NewsPort>,
    pipeline: InsightPipeline,
    config: InsightServiceConfig,
}

impl InsightService {
    /// Create a new InsightService
    pub fn new(
        news: Arc<dyn NewsPort>,
        pipeline: InsightPipeline,
        config: InsightServiceConfig,
    ) -> Self {
        Self {
            news,
            pipeline,
            config,
        }
    }

    pub fn pipeline(&self) -> &InsightPipeline {
        &self.pipeline
    }

    /// Insights for the latest live headlines, in feed order
    ///
    /// Never fails. An unavailable feed yields no insights; a headline whose
    /// sentiment could not be scored is logged and left out.
    #[instrument(skip(self))]
    pub async fn news_insights(&self) -> Vec<Insight> {
        let headlines = match timeout(self.config.news_timeout, self.news.latest_headlines()).await
        {
            Ok(headlines) => headlines,
            Err(_) => {
                warn!(
                    "Headline fetch exceeded {:?}, continuing with none",
                    self.config.news_timeout
                );
                Vec::new()
            }
        };

        if headlines.is_empty() {
            info!("No live headlines available");
            return Vec::new();
        }

        self.pipeline
            .build_insights(&headlines)
            .await
            .into_iter()
            .zip(&headlines)
            .filter_map(|(result, headline)| match result {
                Ok(insight) => Some(insight),
                Err(e) => {
                    error!("Dropping headline '{}': {}", headline, e);
                    None
                }
            })
            .collect()
    }

    /// Insight for one caller-supplied headline
    pub async fn analyze_headline(&self, headline: &str) -> InsightResult<Insight> {
        self.pipeline.build_insight(headline).await
    }
}
