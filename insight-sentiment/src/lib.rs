//! Sentiment scoring for Market Insight
//!
//! Two interchangeable [`insight_core::SentimentPort`] implementations:
//! - [`HuggingFaceClient`]: hosted text-classification model (SST-2 by default)
//! - [`LexiconModel`]: in-process financial keyword scorer, used when no
//!   inference token is configured

pub mod error;
pub mod huggingface;
pub mod lexicon;

pub use error::SentimentError;
pub use huggingface::{HuggingFaceClient, HuggingFaceConfig, DEFAULT_MODEL};
pub use lexicon::LexiconModel;
