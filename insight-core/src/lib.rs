//! Core types for Market Insight
//!
//! This crate defines the shared data structures used across the workspace,
//! including the insight record, the keyword-driven asset mapper, and the
//! port traits through which news, prices and sentiment are consumed.

pub mod asset;
pub mod error;
pub mod insight;
pub mod ports;
pub mod price;
pub mod sentiment;

pub use asset::{AssetMapper, AssetRule, Ticker, ASSET_RULES};
pub use error::{InsightError, InsightResult};
pub use insight::Insight;
pub use ports::{NewsPort, PricePort, SentimentPort};
pub use price::Price;
pub use sentiment::{SentimentLabel, SentimentResult};
