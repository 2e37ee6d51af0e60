//! Latest-close price with an explicit unavailable marker

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Most recent close for a ticker, or an explicit marker that none was found
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Price {
    /// A finite closing price
    Present(f64),
    /// No close could be obtained (no rows, provider error, timeout)
    #[default]
    Unavailable,
}

impl Price {
    /// Wrap a close, collapsing non-finite values to `Unavailable`
    pub fn from_close(close: f64) -> Self {
        if close.is_finite() {
            Price::Present(close)
        } else {
            Price::Unavailable
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Price::Present(v) => Some(*v),
            Price::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Price::Present(_))
    }
}

impl From<Option<f64>> for Price {
    fn from(close: Option<f64>) -> Self {
        close.map(Price::from_close).unwrap_or(Price::Unavailable)
    }
}

// Serialized as a bare number, or null when unavailable.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Present(v) => serializer.serialize_some(v),
            Price::Unavailable => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_is_unavailable() {
        assert_eq!(Price::from_close(f64::NAN), Price::Unavailable);
        assert_eq!(Price::from_close(f64::INFINITY), Price::Unavailable);
        assert_eq!(Price::from_close(412.5), Price::Present(412.5));
    }

    #[test]
    fn test_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Price::Present(97.25)).unwrap(), "97.25");
        assert_eq!(serde_json::to_string(&Price::Unavailable).unwrap(), "null");
        let parsed: Price = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Price::Unavailable);
    }

    #[test]
    fn test_zero_is_a_real_price() {
        let price = Price::from(Some(0.0));
        assert!(price.is_available());
        assert_eq!(price.value(), Some(0.0));
    }
}
