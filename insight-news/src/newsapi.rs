//! NewsAPI client for the live headline feed
//!
//! Queries the `everything` endpoint for the most recent English-language
//! articles on politics, the economy, conflict, crypto and markets.

use std::time::Duration;

use async_trait::async_trait;
use insight_core::NewsPort;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::NewsError;
use crate::types::NewsApiResponse;

/// Key used when `NEWS_API_KEY` is not set; the provider rejects it
pub const PLACEHOLDER_API_KEY: &str = "your_newsapi_key_here";

/// Configuration for the NewsAPI client
#[derive(Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    /// Base URL up to and including the API version, e.g. `https://newsapi.org/v2`
    pub base_url: String,
    /// Search expression sent as `q`
    pub query: String,
    pub language: String,
    pub sort_by: String,
    /// Maximum number of headlines per batch
    pub page_size: usize,
    pub request_timeout: Duration,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            base_url: "https://newsapi.org/v2".to_string(),
            query: "(politics OR economy OR war OR crypto OR market)".to_string(),
            language: "en".to_string(),
            sort_by: "publishedAt".to_string(),
            page_size: 5,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl std::fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("query", &self.query)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("page_size", &self.page_size)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// NewsAPI client
pub struct NewsApiClient {
    client: Client,
    endpoint: Url,
    config: NewsApiConfig,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    pub fn new(config: NewsApiConfig) -> Result<Self, NewsError> {
        if config.page_size == 0 {
            return Err(NewsError::InvalidConfig(
                "page size must be at least 1".to_string(),
            ));
        }

        let mut endpoint = Url::parse(&config.base_url)
            .map_err(|e| NewsError::InvalidConfig(format!("{}: {}", config.base_url, e)))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| NewsError::InvalidConfig(format!("{} cannot be a base", config.base_url)))?
            .pop_if_empty()
            .push("everything");

        if config.api_key == PLACEHOLDER_API_KEY {
            warn!("NEWS_API_KEY not set - live headlines will be empty");
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent("Mozilla/5.0 (compatible; MarketInsight/1.0)")
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Fetch the latest headline titles, most recent first
    ///
    /// Articles without a title are skipped. At most `page_size` titles are
    /// returned even if the provider sends more.
    #[instrument(skip(self), fields(page_size = self.config.page_size))]
    pub async fn fetch_headlines(&self) -> Result<Vec<String>, NewsError> {
        let page_size = self.config.page_size.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .header("X-Api-Key", &self.config.api_key)
            .query(&[
                ("q", self.config.query.as_str()),
                ("language", self.config.language.as_str()),
                ("sortBy", self.config.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<NewsApiResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(body);
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        if parsed.status != "ok" {
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: format!(
                    "{}: {}",
                    parsed.code.unwrap_or_else(|| parsed.status.clone()),
                    parsed.message.unwrap_or_default()
                ),
            });
        }

        info!(
            "Received {} articles from NewsAPI ({} total matches)",
            parsed.articles.len(),
            parsed.total_results.unwrap_or_default()
        );

        let headlines: Vec<String> = parsed
            .articles
            .into_iter()
            .filter_map(|article| {
                debug!(
                    "Article: source={:?}, published_at={:?}, url={:?}",
                    article.source.as_ref().and_then(|s| s.name.as_deref()),
                    article.published_at,
                    article.url
                );
                article.title
            })
            .take(self.config.page_size)
            .collect();

        Ok(headlines)
    }
}

#[async_trait]
impl NewsPort for NewsApiClient {
    async fn latest_headlines(&self) -> Vec<String> {
        match self.fetch_headlines().await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!("Headline fetch failed, continuing with none: {}", e);
                Vec::new()
            }
        }
    }
}
