//! Offline financial-lexicon sentiment model
//!
//! Counts bullish and bearish terms in a headline, flipping a term's polarity
//! when it directly follows a negator ("not", "no", "never", ...). The
//! dominant polarity wins; ties (including no evidence) are NEUTRAL.
//!
//! Confidence is `0.5 + 0.5 * |pos - neg| / (pos + neg + 1)`, which keeps
//! single-term headlines well below certainty and approaches 1.0 only as
//! one-sided evidence accumulates.

use std::collections::HashSet;

use async_trait::async_trait;
use insight_core::{InsightError, SentimentLabel, SentimentPort, SentimentResult};

const POSITIVE_TERMS: &[&str] = &[
    "surge", "surges", "surged", "soar", "soars", "soared", "rally", "rallies", "rallied",
    "gain", "gains", "gained", "jump", "jumps", "jumped", "rise", "rises", "rose", "climb",
    "climbs", "climbed", "rebound", "rebounds", "boost", "boosts", "growth", "grows", "record",
    "beat", "beats", "bullish", "upgrade", "upgrades", "optimism", "optimistic", "recovery",
    "recovers", "strong", "stronger", "profit", "profits", "win", "wins", "deal", "agreement",
    "ceasefire", "breakthrough", "approval", "approves", "approved", "easing", "eases", "cut",
    "cuts", "hope", "hopes", "stable", "peace",
];

const NEGATIVE_TERMS: &[&str] = &[
    "fall", "falls", "fell", "drop", "drops", "dropped", "plunge", "plunges", "plunged", "crash",
    "crashes", "crashed", "slump", "slumps", "slide", "slides", "sink", "sinks", "sank",
    "tumble", "tumbles", "loss", "losses", "lose", "loses", "weak", "weaker", "bearish",
    "downgrade", "downgrades", "fear", "fears", "panic", "crisis", "war", "attack", "attacks",
    "sanction", "sanctions", "tariff", "tariffs", "recession", "default", "fraud", "hack",
    "hacked", "ban", "bans", "lawsuit", "probe", "collapse", "collapses", "selloff",
    "sell-off", "inflation", "layoffs", "strike", "conflict", "tension", "tensions", "warns",
    "warning", "miss", "misses", "slowdown",
];

const NEGATORS: &[&str] = &["not", "no", "never", "without", "hardly", "barely"];

/// Deterministic, in-process sentiment scorer for financial headlines
#[derive(Debug, Clone)]
pub struct LexiconModel {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negators: HashSet<&'static str>,
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconModel {
    /// Create a model with the built-in financial lexicon
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_TERMS.iter().copied().collect(),
            negative: NEGATIVE_TERMS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    /// Score `text`. Never fails; empty text is NEUTRAL at 0.5.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '-'))
            .filter(|t| !t.is_empty())
            .collect();

        let mut positive = 0u32;
        let mut negative = 0u32;
        for (i, token) in tokens.iter().enumerate() {
            let polarity = match (self.positive.contains(*token), self.negative.contains(*token)) {
                (true, false) => 1,
                (false, true) => -1,
                _ => 0,
            };
            let negated = i > 0 && self.negators.contains(tokens[i - 1]);
            match if negated { -polarity } else { polarity } {
                1 => positive += 1,
                -1 => negative += 1,
                _ => {}
            }
        }

        let (label, diff) = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => (SentimentLabel::Positive, positive - negative),
            std::cmp::Ordering::Less => (SentimentLabel::Negative, negative - positive),
            std::cmp::Ordering::Equal => (SentimentLabel::Neutral, 0),
        };
        let confidence = 0.5 + 0.5 * f64::from(diff) / f64::from(positive + negative + 1);

        SentimentResult { label, confidence }
    }
}

#[async_trait]
impl SentimentPort for LexiconModel {
    async fn score(&self, text: &str) -> Result<SentimentResult, InsightError> {
        Ok(self.analyze(text))
    }
}
