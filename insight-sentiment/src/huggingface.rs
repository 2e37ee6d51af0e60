//! Hosted text-classification client
//!
//! Sends `{"inputs": text}` to the inference endpoint of a sentiment model and
//! keeps only the top-ranked label. The endpoint answers with either a nested
//! list (one distribution per input) or a flat list, depending on the model
//! and API version; both are accepted.

use std::time::Duration;

use async_trait::async_trait;
use insight_core::{InsightError, SentimentLabel, SentimentPort, SentimentResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::error::SentimentError;

/// Default model: DistilBERT fine-tuned on SST-2 (binary POSITIVE/NEGATIVE)
pub const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Configuration for the hosted classifier
#[derive(Clone)]
pub struct HuggingFaceConfig {
    pub api_token: String,
    /// Base URL that model ids are appended to
    pub base_url: String,
    pub model: String,
    pub request_timeout: Duration,
}

impl HuggingFaceConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: "https://router.huggingface.co/hf-inference/models".to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl std::fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("api_token", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Error { error: String },
}

/// Hosted sentiment classifier client
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    endpoint: Url,
    api_token: String,
}

impl HuggingFaceClient {
    /// Create a new client for the configured model
    pub fn new(config: HuggingFaceConfig) -> Result<Self, SentimentError> {
        if config.api_token.trim().is_empty() {
            return Err(SentimentError::InvalidConfig(
                "inference API token is empty".to_string(),
            ));
        }

        let mut endpoint = Url::parse(&config.base_url)
            .map_err(|e| SentimentError::InvalidConfig(format!("{}: {}", config.base_url, e)))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| {
                SentimentError::InvalidConfig(format!("{} cannot be a base", config.base_url))
            })?
            .pop_if_empty()
            .extend(config.model.split('/'));

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            endpoint,
            api_token: config.api_token,
        })
    }

    /// Classify `text` and return the top-ranked label with its score
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn classify(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(&ClassificationRequest { inputs: text })
            .send()
            .await
            .map_err(|e| SentimentError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SentimentError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ClassificationResponse>(&body)
                .ok()
                .and_then(|r| match r {
                    ClassificationResponse::Error { error } => Some(error),
                    _ => None,
                })
                .unwrap_or(body);
            return Err(SentimentError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ClassificationResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::ParseError(e.to_string()))?;

        let distribution = match parsed {
            ClassificationResponse::Nested(mut outer) => {
                if outer.is_empty() {
                    Vec::new()
                } else {
                    outer.swap_remove(0)
                }
            }
            ClassificationResponse::Flat(flat) => flat,
            ClassificationResponse::Error { error } => {
                return Err(SentimentError::ApiError {
                    status: status.as_u16(),
                    message: error,
                });
            }
        };

        let top = top_ranked(distribution)?;
        debug!("Top label {} ({:.4})", top.label, top.confidence);
        Ok(top)
    }
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_token", &"[redacted]")
            .finish()
    }
}

fn top_ranked(distribution: Vec<LabelScore>) -> Result<SentimentResult, SentimentError> {
    let best = distribution
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or(SentimentError::EmptyDistribution)?;

    let label: SentimentLabel = best
        .label
        .parse()
        .map_err(|_| SentimentError::UnknownLabel(best.label.clone()))?;

    SentimentResult::new(label, best.score).map_err(|_| SentimentError::ScoreOutOfRange(best.score))
}

#[async_trait]
impl SentimentPort for HuggingFaceClient {
    async fn score(&self, text: &str) -> Result<SentimentResult, InsightError> {
        Ok(self.classify(text).await?)
    }
}
