//! Position sizing from available funds.
//!
//! Kept apart from the scanner: it only post-processes a found trade.

use crate::error::SizingError;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Shares affordable at the buy price and the resulting profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSize {
    /// Shares bought, whole or floored to two decimals.
    pub shares: Decimal,
    /// Profit from selling every share, rounded to cents.
    pub profit: Decimal,
}

/// Computes how many shares `funds` buys and what selling them earns.
///
/// # Arguments
///
/// * `funds` - Money available to invest
/// * `buy_price` - Price per share at the buy point
/// * `sell_price` - Price per share at the sell point
/// * `allow_fractional` - Floor shares to two decimals instead of to an integer
///
/// # Errors
/// Returns an error if funds or buy price are not positive, a price has no
/// decimal representation, the funds cannot buy any shares, or the share
/// count or profit exceeds the decimal range.
pub fn size_position(
    funds: Decimal,
    buy_price: f64,
    sell_price: f64,
    allow_fractional: bool,
) -> Result<PositionSize, SizingError> {
    if funds <= Decimal::ZERO {
        return Err(SizingError::NonPositiveFunds);
    }

    let buy = Decimal::from_f64(buy_price).ok_or(SizingError::UnrepresentablePrice(buy_price))?;
    let sell =
        Decimal::from_f64(sell_price).ok_or(SizingError::UnrepresentablePrice(sell_price))?;
    if buy <= Decimal::ZERO {
        return Err(SizingError::NonPositiveBuyPrice);
    }

    let raw_shares = funds.checked_div(buy).ok_or(SizingError::Overflow)?;
    let shares = if allow_fractional {
        raw_shares.round_dp_with_strategy(2, RoundingStrategy::ToZero)
    } else {
        raw_shares.floor()
    };
    if shares.is_zero() {
        return Err(SizingError::InsufficientFunds);
    }

    let profit = sell
        .checked_sub(buy)
        .and_then(|spread| shares.checked_mul(spread))
        .ok_or(SizingError::Overflow)?
        .round_dp(2);
    Ok(PositionSize {
        shares: shares.normalize(),
        profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_shares() {
        let size = size_position(dec!(1000), 3.0, 4.5, false).unwrap();
        assert_eq!(size.shares, dec!(333));
        assert_eq!(size.profit, dec!(499.50));
    }

    #[test]
    fn test_fractional_shares_floor_to_cents() {
        let size = size_position(dec!(225), 250.0, 260.0, true).unwrap();
        assert_eq!(size.shares, dec!(0.9));
        assert_eq!(size.profit, dec!(9.00));

        let size = size_position(dec!(10), 3.0, 4.0, true).unwrap();
        assert_eq!(size.shares, dec!(3.33));
        assert_eq!(size.profit, dec!(3.33));
    }

    #[test]
    fn test_insufficient_funds() {
        assert_eq!(
            size_position(dec!(225), 250.0, 260.0, false),
            Err(SizingError::InsufficientFunds)
        );
        assert_eq!(
            size_position(dec!(0.001), 1.0, 2.0, true),
            Err(SizingError::InsufficientFunds)
        );
    }

    #[test]
    fn test_extreme_ratios_overflow_instead_of_panicking() {
        assert_eq!(
            size_position(dec!(1000000000000), 1e-20, 1.0, false),
            Err(SizingError::Overflow)
        );
        assert_eq!(
            size_position(Decimal::MAX, 1.0, 1e20, false),
            Err(SizingError::Overflow)
        );
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert_eq!(
            size_position(Decimal::ZERO, 1.0, 2.0, false),
            Err(SizingError::NonPositiveFunds)
        );
        assert_eq!(
            size_position(dec!(-5), 1.0, 2.0, false),
            Err(SizingError::NonPositiveFunds)
        );
        assert_eq!(
            size_position(dec!(100), 0.0, 2.0, false),
            Err(SizingError::NonPositiveBuyPrice)
        );
    }
}
