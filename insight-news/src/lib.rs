//! Headline feed for Market Insight
//!
//! This crate provides the NewsAPI client that supplies the latest
//! headlines, most recent first, in a bounded batch.

pub mod error;
pub mod newsapi;
pub mod types;

pub use error::NewsError;
pub use newsapi::{NewsApiClient, NewsApiConfig, PLACEHOLDER_API_KEY};
