use crate::entities::PricePoint;
use crate::time::serde_instant;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A buy point followed by a sell point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradePair {
    /// Entry point.
    pub buy: PricePoint,
    /// Exit point, later than `buy`.
    pub sell: PricePoint,
}

impl TradePair {
    pub fn new(buy: PricePoint, sell: PricePoint) -> Self {
        Self { buy, sell }
    }

    /// Price difference per share.
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.sell.price - self.buy.price
    }

    /// Time between buying and selling.
    #[must_use]
    pub fn holding_period(&self) -> TimeDelta {
        self.sell.timestamp - self.buy.timestamp
    }
}

/// Outcome of a best-trade scan.
///
/// Either all four fields are set, or all are `None` when the window holds no
/// profitable pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TradeResult {
    /// Buy instant.
    #[serde(with = "serde_instant")]
    pub buy_time: Option<DateTime<Utc>>,
    /// Sell instant.
    #[serde(with = "serde_instant")]
    pub sell_time: Option<DateTime<Utc>>,
    /// Price at the buy instant.
    pub buy_price: Option<f64>,
    /// Price at the sell instant.
    pub sell_price: Option<f64>,
}

impl TradeResult {
    /// The empty result: no profitable trade in the window.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.pair().is_some()
    }

    /// Reassembles the pair when all four fields are present.
    #[must_use]
    pub fn pair(&self) -> Option<TradePair> {
        match (self.buy_time, self.sell_time, self.buy_price, self.sell_price) {
            (Some(buy_time), Some(sell_time), Some(buy_price), Some(sell_price)) => {
                Some(TradePair::new(
                    PricePoint::new(buy_time, buy_price),
                    PricePoint::new(sell_time, sell_price),
                ))
            }
            _ => None,
        }
    }
}

impl From<TradePair> for TradeResult {
    fn from(pair: TradePair) -> Self {
        Self {
            buy_time: Some(pair.buy.timestamp),
            sell_time: Some(pair.sell.timestamp),
            buy_price: Some(pair.buy.price),
            sell_price: Some(pair.sell.price),
        }
    }
}
