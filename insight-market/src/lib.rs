//! Market data for Market Insight
//!
//! Resolves the most recent daily close for a ticker from a short trailing
//! window of Yahoo Finance history.

pub mod error;
pub mod yahoo;

pub use error::PriceError;
pub use yahoo::{YahooChartClient, YahooChartConfig};
