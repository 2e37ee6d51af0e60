//! Server configuration from environment variables

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use insight_market::YahooChartConfig;
use insight_news::NewsApiConfig;
use insight_sentiment::HuggingFaceConfig;
use insight_services::{InsightServiceConfig, PipelineConfig};
use tracing::warn;

/// Which sentiment model backs the pipeline
#[derive(Clone)]
pub enum SentimentBackend {
    /// Hosted classifier (requires `HF_API_TOKEN`)
    HuggingFace(HuggingFaceConfig),
    /// In-process lexicon model
    Lexicon,
}

impl std::fmt::Debug for SentimentBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBackend::HuggingFace(cfg) => write!(f, "HuggingFace({})", cfg.model),
            SentimentBackend::Lexicon => f.write_str("Lexicon"),
        }
    }
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub news: NewsApiConfig,
    pub prices: YahooChartConfig,
    pub sentiment: SentimentBackend,
    pub pipeline: PipelineConfig,
    pub service: InsightServiceConfig,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from process environment variables
    ///
    /// Reads:
    /// - NEWS_API_KEY, NEWS_API_URL, NEWS_PAGE_SIZE
    /// - HF_API_TOKEN, SENTIMENT_MODEL
    /// - YAHOO_CHART_URL
    /// - PIPELINE_CONCURRENCY
    /// - SERVER_HOST, SERVER_PORT
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut news = NewsApiConfig::default();
        if let Some(key) = get("NEWS_API_KEY") {
            news.api_key = key;
        }
        if let Some(url) = get("NEWS_API_URL") {
            news.base_url = url;
        }
        if let Some(size) = get("NEWS_PAGE_SIZE") {
            news.page_size = parse_positive("NEWS_PAGE_SIZE", &size)?;
        }

        let mut prices = YahooChartConfig::default();
        if let Some(url) = get("YAHOO_CHART_URL") {
            prices.base_url = Some(url);
        }

        let sentiment = match get("HF_API_TOKEN") {
            Some(token) => {
                let mut hf = HuggingFaceConfig::new(token);
                if let Some(model) = get("SENTIMENT_MODEL") {
                    hf.model = model;
                }
                SentimentBackend::HuggingFace(hf)
            }
            None => {
                if let Some(model) = get("SENTIMENT_MODEL") {
                    warn!("SENTIMENT_MODEL={} ignored without HF_API_TOKEN", model);
                }
                SentimentBackend::Lexicon
            }
        };

        let mut pipeline = PipelineConfig::default();
        if let Some(n) = get("PIPELINE_CONCURRENCY") {
            pipeline.max_concurrency = parse_positive("PIPELINE_CONCURRENCY", &n)?;
        }

        let host = match get("SERVER_HOST") {
            Some(h) => h.parse().map_err(|_| ConfigError::Invalid {
                field: "SERVER_HOST".to_string(),
                value: h,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match get("SERVER_PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::Invalid {
                field: "SERVER_PORT".to_string(),
                value: p,
            })?,
            None => default_port(),
        };

        Ok(Self {
            news,
            prices,
            sentiment,
            pipeline,
            service: InsightServiceConfig::default(),
            host,
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_port() -> u16 {
    8000
}

fn parse_positive(field: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}'")]
    Invalid { field: String, value: String },
}
