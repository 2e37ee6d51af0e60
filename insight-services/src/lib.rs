//! Business logic services for Market Insight
//!
//! This crate composes the sentiment, asset-mapping and price ports into the
//! headline-to-insight pipeline, and provides the service used by the HTTP
//! layer for the live-feed and single-headline paths.

pub mod insight_service;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use insight_service::{InsightService, InsightServiceConfig};
pub use pipeline::{InsightPipeline, PipelineConfig};
