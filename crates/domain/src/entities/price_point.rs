use crate::error::PointParseError;
use crate::time::parse_instant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed price at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// When the price was observed.
    pub timestamp: DateTime<Utc>,
    /// Observed price. Zero and negative values pass through unchanged.
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Parses a point from its raw textual fields.
    ///
    /// # Errors
    /// Returns an error if the timestamp is not a valid instant or the
    /// price is not a finite number.
    pub fn parse(timestamp_text: &str, price_text: &str) -> Result<Self, PointParseError> {
        let timestamp = parse_instant(timestamp_text)
            .ok_or_else(|| PointParseError::InvalidTimestamp(timestamp_text.to_string()))?;

        let price = price_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| PointParseError::InvalidPrice(price_text.to_string()))?;

        Ok(Self::new(timestamp, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_valid_point() {
        let point = PricePoint::parse("2025-07-05T00:00:00Z", " 101.25 ").unwrap();
        assert_eq!(
            point.timestamp,
            Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(point.price, 101.25);
    }

    #[test]
    fn test_parse_keeps_non_positive_prices() {
        assert_eq!(PricePoint::parse("2025-07-05", "0").unwrap().price, 0.0);
        assert_eq!(PricePoint::parse("2025-07-05", "-3.5").unwrap().price, -3.5);
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        assert_eq!(
            PricePoint::parse("not a date", "100"),
            Err(PointParseError::InvalidTimestamp("not a date".to_string()))
        );
        assert_eq!(
            PricePoint::parse("2025-07-05T00:00:00Z", "abc"),
            Err(PointParseError::InvalidPrice("abc".to_string()))
        );
        assert!(PricePoint::parse("2025-07-05T00:00:00Z", "NaN").is_err());
        assert!(PricePoint::parse("2025-07-05T00:00:00Z", "inf").is_err());
        assert!(PricePoint::parse("2025-07-05T00:00:00Z", "").is_err());
    }
}
