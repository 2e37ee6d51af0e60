//! Sentiment labels and scored results

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InsightError;

/// Sentiment label reported by a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    /// Accepts named model labels case-insensitively. Generic `LABEL_n` ids
    /// are rejected: their meaning depends on the classification head.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" => Ok(SentimentLabel::Positive),
            "negative" | "neg" => Ok(SentimentLabel::Negative),
            "neutral" | "neu" => Ok(SentimentLabel::Neutral),
            _ => Err(format!("Unknown sentiment label: {}", s)),
        }
    }
}

/// Top-ranked label and its confidence for one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Always within [0.0, 1.0]
    pub confidence: f64,
}

impl SentimentResult {
    /// Build a result, rejecting confidences outside [0.0, 1.0] or NaN
    pub fn new(label: SentimentLabel, confidence: f64) -> Result<Self, InsightError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(InsightError::sentiment(format!(
                "confidence {} outside [0, 1]",
                confidence
            )));
        }
        Ok(Self { label, confidence })
    }
}
