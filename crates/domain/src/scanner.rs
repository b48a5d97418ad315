//! Single-pass best trade scanner.
//!
//! Walks the window once, keeping the running minimum as the buy candidate
//! and every later point as a sell candidate. Among pairs with equal profit
//! the one with the shorter holding period wins; on a further tie the pair
//! found first is kept.

use crate::entities::{PricePoint, Series};
use crate::error::TradeError;
use crate::validation::validate_window;
use crate::value_objects::{TradePair, TradeResult, Window};

/// Validates the window and scans it for the most profitable trade.
///
/// # Errors
/// Returns a [`TradeError`] if the window is malformed, out of bounds or
/// holds no points. An unprofitable window is not an error and yields
/// [`TradeResult::none`].
pub fn find_best_trade(
    series: &Series,
    start_text: &str,
    end_text: &str,
) -> Result<TradeResult, TradeError> {
    let window = validate_window(series, start_text, end_text)?;
    scan_window(series, &window)
}

/// Scans an already validated window.
///
/// # Errors
/// Returns [`TradeError::EmptyRange`] if no point falls inside the window.
pub fn scan_window(series: &Series, window: &Window) -> Result<TradeResult, TradeError> {
    let points = series.range(window.start, window.end);
    if points.is_empty() {
        return Err(TradeError::EmptyRange {
            start: window.start,
            end: window.end,
        });
    }

    Ok(best_pair(points).map_or_else(TradeResult::none, TradeResult::from))
}

/// Finds the maximum-profit pair with the buy strictly before the sell.
///
/// Returns `None` when no pair has a positive profit.
#[must_use]
pub fn best_pair(points: &[PricePoint]) -> Option<TradePair> {
    let mut lowest = *points.first()?;
    let mut max_profit = 0.0_f64;
    let mut best: Option<TradePair> = None;

    for point in points {
        let profit = point.price - lowest.price;

        if profit > 0.0 {
            let candidate = TradePair::new(lowest, *point);
            let replaces = match &best {
                None => true,
                Some(incumbent) => {
                    profit > max_profit
                        || (profit == max_profit
                            && candidate.holding_period() < incumbent.holding_period())
                }
            };
            if replaces {
                max_profit = profit;
                best = Some(candidate);
            }
        }

        // Must follow the sell check so a point never pairs with itself.
        if point.price < lowest.price {
            lowest = *point;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn at(s: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, 0).unwrap() + TimeDelta::seconds(s)
    }

    fn series(prices: &[f64]) -> Series {
        Series::new(
            prices
                .iter()
                .enumerate()
                .map(|(i, &p)| PricePoint::new(at(i as i64), p))
                .collect(),
        )
        .unwrap()
    }

    fn iso(s: i64) -> String {
        crate::time::format_instant(&at(s))
    }

    fn assert_trade(result: TradeResult, buy: (i64, f64), sell: (i64, f64)) {
        assert_eq!(result.buy_time, Some(at(buy.0)));
        assert_eq!(result.buy_price, Some(buy.1));
        assert_eq!(result.sell_time, Some(at(sell.0)));
        assert_eq!(result.sell_price, Some(sell.1));
    }

    #[test]
    fn test_increasing_prices() {
        let s = series(&[100.0, 110.0, 120.0]);
        let result = find_best_trade(&s, &iso(0), &iso(2)).unwrap();
        assert_trade(result, (0, 100.0), (2, 120.0));
    }

    #[test]
    fn test_tie_prefers_shorter_holding() {
        let s = series(&[100.0, 200.0, 200.0]);
        let result = find_best_trade(&s, &iso(0), &iso(2)).unwrap();
        assert_trade(result, (0, 100.0), (1, 200.0));
    }

    #[test]
    fn test_mixed_prices() {
        let s = series(&[100.0, 200.0, 300.0, 100.0, 230.0]);
        let result = find_best_trade(&s, &iso(0), &iso(4)).unwrap();
        assert_trade(result, (0, 100.0), (2, 300.0));
    }

    #[test]
    fn test_later_shorter_pair_wins_tie() {
        // (0,10)->(2,20) and (3,5)->(4,15) both earn 10; the second is shorter.
        let s = series(&[10.0, 12.0, 20.0, 5.0, 15.0]);
        let result = find_best_trade(&s, &iso(0), &iso(4)).unwrap();
        assert_trade(result, (3, 5.0), (4, 15.0));
    }

    #[test]
    fn test_equal_duration_tie_keeps_earliest() {
        let s = series(&[10.0, 20.0, 5.0, 15.0]);
        let result = find_best_trade(&s, &iso(0), &iso(3)).unwrap();
        assert_trade(result, (0, 10.0), (1, 20.0));
    }

    #[test]
    fn test_higher_profit_beats_shorter_duration() {
        let s = series(&[10.0, 20.0, 5.0, 9.0, 30.0]);
        let result = find_best_trade(&s, &iso(0), &iso(4)).unwrap();
        assert_trade(result, (2, 5.0), (4, 30.0));
    }

    #[test]
    fn test_non_increasing_prices_yield_empty_result() {
        for prices in [[120.0, 110.0, 100.0], [100.0, 100.0, 100.0]] {
            let s = series(&prices);
            let result = find_best_trade(&s, &iso(0), &iso(2)).unwrap();
            assert_eq!(result, TradeResult::none());
        }
    }

    #[test]
    fn test_single_point_window_yields_empty_result() {
        let s = series(&[100.0, 200.0]);
        let result = find_best_trade(&s, &iso(1), &iso(1)).unwrap();
        assert_eq!(result, TradeResult::none());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let s = series(&[50.0, 100.0, 80.0, 120.0, 500.0]);
        let result = find_best_trade(&s, &iso(1), &iso(3)).unwrap();
        assert_trade(result, (2, 80.0), (3, 120.0));
    }

    #[test]
    fn test_duplicate_timestamps_never_self_pair() {
        let s = Series::new(vec![
            PricePoint::new(at(0), 100.0),
            PricePoint::new(at(0), 90.0),
            PricePoint::new(at(1), 95.0),
        ])
        .unwrap();
        let result = find_best_trade(&s, &iso(0), &iso(1)).unwrap();
        assert_trade(result, (0, 90.0), (1, 95.0));
    }

    #[test]
    fn test_gap_is_empty_range() {
        let s = Series::new(vec![
            PricePoint::new(at(0), 100.0),
            PricePoint::new(at(10), 110.0),
        ])
        .unwrap();
        assert_eq!(
            find_best_trade(&s, &iso(2), &iso(8)),
            Err(TradeError::EmptyRange {
                start: at(2),
                end: at(8),
            })
        );
    }

    #[test]
    fn test_start_before_data_names_both_values() {
        let s = series(&[100.0, 110.0]);
        let err = find_best_trade(&s, &iso(-60), &iso(1)).unwrap_err();
        assert_eq!(
            err,
            TradeError::StartBeforeData {
                start: at(-60),
                first: at(0),
            }
        );
        let message = err.to_string();
        assert!(message.contains("2025-07-04T23:59:00.000Z"));
        assert!(message.contains("2025-07-05T00:00:00.000Z"));
    }

    #[test]
    fn test_large_increasing_series() {
        let n = 100_000;
        let s = Series::new(
            (0..n)
                .map(|i| PricePoint::new(at(i), 100.0 + i as f64))
                .collect(),
        )
        .unwrap();
        let result = find_best_trade(&s, &iso(0), &iso(n - 1)).unwrap();
        assert_trade(result, (0, 100.0), (n - 1, 100.0 + (n - 1) as f64));
    }

    #[test]
    fn test_result_lies_within_window() {
        let prices = [7.0, 3.0, 9.0, 1.0, 4.0, 8.0, 2.0, 6.0, 5.0, 10.0];
        let s = series(&prices);
        for start in 0..prices.len() as i64 {
            for end in start..prices.len() as i64 {
                let result = find_best_trade(&s, &iso(start), &iso(end)).unwrap();
                if let Some(pair) = result.pair() {
                    let window = Window::new(at(start), at(end));
                    assert!(pair.buy.timestamp < pair.sell.timestamp);
                    assert!(window.contains(pair.buy.timestamp));
                    assert!(window.contains(pair.sell.timestamp));
                    assert!(s.points().contains(&pair.buy));
                    assert!(s.points().contains(&pair.sell));
                }
            }
        }
    }
}
