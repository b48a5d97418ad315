//! Domain error types.

use crate::time::format_instant;
use chrono::{DateTime, Utc};

/// Failure to turn one raw record into a price point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointParseError {
    /// Timestamp text is not a valid instant.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
    /// Price text is not a finite number.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Series construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeriesError {
    /// No usable points were supplied.
    #[error("Price source contains no valid entries.")]
    NoValidData,
}

/// Reasons a best-trade query cannot be answered.
///
/// Variants are listed in the order the window checks run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    /// Start text is not a valid instant.
    #[error("Invalid start time: {input:?}")]
    InvalidStart {
        /// Raw start text.
        input: String,
    },
    /// End text is not a valid instant.
    #[error("Invalid end time: {input:?}")]
    InvalidEnd {
        /// Raw end text.
        input: String,
    },
    /// Start lies before the first point of the series.
    #[error(
        "Start time in the request ({}) is earlier than the first data entry ({}).",
        format_instant(.start),
        format_instant(.first)
    )]
    StartBeforeData {
        /// Requested start.
        start: DateTime<Utc>,
        /// First timestamp in the series.
        first: DateTime<Utc>,
    },
    /// End lies after the last point of the series.
    #[error(
        "End time in the request ({}) is later than the last data entry ({}).",
        format_instant(.end),
        format_instant(.last)
    )]
    EndAfterData {
        /// Requested end.
        end: DateTime<Utc>,
        /// Last timestamp in the series.
        last: DateTime<Utc>,
    },
    /// End precedes start.
    #[error("End time is before start time.")]
    EndBeforeStart {
        /// Requested start.
        start: DateTime<Utc>,
        /// Requested end.
        end: DateTime<Utc>,
    },
    /// The window is within bounds but holds no points.
    #[error("No data available in the selected time range.")]
    EmptyRange {
        /// Window start.
        start: DateTime<Utc>,
        /// Window end.
        end: DateTime<Utc>,
    },
}

/// Position sizing errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SizingError {
    /// Funds are zero or negative.
    #[error("Available funds must be a positive number.")]
    NonPositiveFunds,
    /// Buy price is zero or negative.
    #[error("Buy price must be a positive number.")]
    NonPositiveBuyPrice,
    /// Price is not finite or out of decimal range.
    #[error("Price {0} cannot be represented as a decimal.")]
    UnrepresentablePrice(f64),
    /// Funds do not cover the smallest purchasable quantity.
    #[error("Insufficient funds to buy any stocks at the buy price.")]
    InsufficientFunds,
    /// Share count or profit exceeds the decimal range.
    #[error("Position size is too large to compute.")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bounds_messages_name_both_instants() {
        let err = TradeError::StartBeforeData {
            start: Utc.with_ymd_and_hms(2025, 7, 4, 23, 59, 0).unwrap(),
            first: Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Start time in the request (2025-07-04T23:59:00.000Z) is earlier than the first data entry (2025-07-05T00:00:00.000Z)."
        );

        let err = TradeError::EndAfterData {
            end: Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 4).unwrap(),
            last: Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 2).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "End time in the request (2025-07-05T00:00:04.000Z) is later than the last data entry (2025-07-05T00:00:02.000Z)."
        );
    }
}
