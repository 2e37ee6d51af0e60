//! Keyword-driven mapping from headline text to a proxy asset
//!
//! Rules are evaluated in order and the first rule with any keyword present
//! in the lower-cased headline wins. Rules overlap ("oil" and "crypto" can both
//! appear in one headline), so the order of [`ASSET_RULES`] is part of the
//! contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proxy assets a headline can be linked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ticker {
    /// Energy Select Sector SPDR
    #[serde(rename = "XLE")]
    Xle,
    /// Bitcoin priced in US dollars
    #[serde(rename = "BTC-USD")]
    BtcUsd,
    /// Alibaba Group
    #[serde(rename = "BABA")]
    Baba,
    /// iShares Global Clean Energy
    #[serde(rename = "ICLN")]
    Icln,
    /// iShares 20+ Year Treasury Bond
    #[serde(rename = "TLT")]
    Tlt,
    /// SPDR S&P 500, the broad-market fallback
    #[serde(rename = "SPY")]
    Spy,
}

impl Ticker {
    /// Every ticker the mapper can produce
    pub const ALL: [Ticker; 6] = [
        Ticker::Xle,
        Ticker::BtcUsd,
        Ticker::Baba,
        Ticker::Icln,
        Ticker::Tlt,
        Ticker::Spy,
    ];

    /// Market data symbol for this ticker
    pub fn symbol(&self) -> &'static str {
        match self {
            Ticker::Xle => "XLE",
            Ticker::BtcUsd => "BTC-USD",
            Ticker::Baba => "BABA",
            Ticker::Icln => "ICLN",
            Ticker::Tlt => "TLT",
            Ticker::Spy => "SPY",
        }
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Ticker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ticker::ALL
            .into_iter()
            .find(|t| t.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown ticker: {}", s))
    }
}

/// A single mapping rule: any keyword match links the headline to `ticker`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRule {
    /// Lower-case substrings searched for in the headline
    pub keywords: &'static [&'static str],
    pub ticker: Ticker,
}

impl AssetRule {
    /// First keyword of this rule found in already lower-cased text
    pub fn matching_keyword(&self, lowered: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| lowered.contains(kw))
    }
}

/// Ordered rule table; earlier rules take precedence
pub const ASSET_RULES: [AssetRule; 5] = [
    AssetRule {
        keywords: &["oil", "middle east"],
        ticker: Ticker::Xle,
    },
    AssetRule {
        keywords: &["bitcoin", "crypto"],
        ticker: Ticker::BtcUsd,
    },
    AssetRule {
        keywords: &["china", "trade"],
        ticker: Ticker::Baba,
    },
    AssetRule {
        keywords: &["green", "energy"],
        ticker: Ticker::Icln,
    },
    AssetRule {
        keywords: &["interest rates", "inflation"],
        ticker: Ticker::Tlt,
    },
];

/// Maps headlines to tickers using an ordered rule table plus a fallback
#[derive(Debug, Clone, Copy)]
pub struct AssetMapper {
    rules: &'static [AssetRule],
    fallback: Ticker,
}

impl Default for AssetMapper {
    fn default() -> Self {
        Self {
            rules: &ASSET_RULES,
            fallback: Ticker::Spy,
        }
    }
}

impl AssetMapper {
    /// Create a mapper with the standard rule table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with a custom rule table and fallback
    pub fn with_rules(rules: &'static [AssetRule], fallback: Ticker) -> Self {
        Self { rules, fallback }
    }

    /// Link a headline to exactly one ticker. Never fails.
    pub fn map(&self, text: &str) -> Ticker {
        self.matched_rule(text)
            .map(|(rule, _)| rule.ticker)
            .unwrap_or(self.fallback)
    }

    /// The first rule that fires for `text`, with the keyword that fired it.
    /// `None` means the fallback applies.
    pub fn matched_rule(&self, text: &str) -> Option<(&'static AssetRule, &'static str)> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find_map(|rule| rule.matching_keyword(&lowered).map(|kw| (rule, kw)))
    }

    pub fn fallback(&self) -> Ticker {
        self.fallback
    }
}
