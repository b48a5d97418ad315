//! Immutable, time-ordered price history.

use crate::entities::price_point::PricePoint;
use crate::error::SeriesError;
use chrono::{DateTime, Utc};

/// A non-empty sequence of price points sorted ascending by timestamp.
///
/// Points sharing a timestamp keep their ingestion order. The series cannot
/// be mutated once built; share it behind an `Arc` for concurrent reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    /// Builds a series, sorting the points by timestamp with a stable sort.
    ///
    /// # Errors
    /// Returns [`SeriesError::NoValidData`] if `points` is empty.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::NoValidData);
        }
        points.sort_by_key(|p| p.timestamp);
        Ok(Self { points })
    }

    /// Returns all points in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest point.
    #[must_use]
    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    /// Latest point.
    #[must_use]
    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    /// Returns the contiguous run of points with `start <= timestamp <= end`.
    #[must_use]
    pub fn range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> &[PricePoint] {
        let lo = self.points.partition_point(|p| p.timestamp < start);
        let hi = self.points.partition_point(|p| p.timestamp <= end);
        if lo >= hi {
            return &[];
        }
        &self.points[lo..hi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 5, 0, 0, s).unwrap()
    }

    #[test]
    fn test_empty_series_is_rejected() {
        assert_eq!(Series::new(Vec::new()), Err(SeriesError::NoValidData));
    }

    #[test]
    fn test_points_are_sorted_stably() {
        let series = Series::new(vec![
            PricePoint::new(at(2), 3.0),
            PricePoint::new(at(1), 1.0),
            PricePoint::new(at(2), 4.0),
            PricePoint::new(at(0), 0.5),
            PricePoint::new(at(1), 2.0),
        ])
        .unwrap();

        let prices: Vec<f64> = series.points().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![0.5, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(series.first().timestamp, at(0));
        assert_eq!(series.last().timestamp, at(2));
        assert_eq!(series.len(), 5);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_range_is_inclusive() {
        let series = Series::new((0..5).map(|s| PricePoint::new(at(s), f64::from(s))).collect())
            .unwrap();

        let slice = series.range(at(1), at(3));
        assert_eq!(slice.len(), 3);
        assert_eq!(slice[0].timestamp, at(1));
        assert_eq!(slice[2].timestamp, at(3));

        assert_eq!(series.range(at(4), at(4)).len(), 1);
    }

    #[test]
    fn test_range_over_gap_is_empty() {
        let series = Series::new(vec![
            PricePoint::new(at(0), 1.0),
            PricePoint::new(at(10), 2.0),
        ])
        .unwrap();

        assert!(series.range(at(2), at(8)).is_empty());
        assert!(series.range(at(8), at(2)).is_empty());
    }
}
