//! Wire types for the NewsAPI `everything` endpoint

use serde::Deserialize;

/// Top-level NewsAPI response
///
/// Successful responses carry `status: "ok"` and `articles`; failures carry
/// `status: "error"` with `code` and `message`.
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    pub status: String,
    /// Total number of matches on the provider side (not the page size)
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A single article; only the title is required downstream
#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    #[serde(default)]
    pub source: Option<NewsApiSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO 8601 publication timestamp
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub name: Option<String>,
}
