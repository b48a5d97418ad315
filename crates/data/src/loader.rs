//! Record parsing and series construction.

use crate::error::LoadError;
use crate::sources::{PriceSource, RawRecord};
use best_trade_domain::time::format_instant;
use best_trade_domain::{PricePoint, Series};
use tracing::{info, warn};

/// Reads the whole source and builds a sorted series from it.
///
/// Parsing and sorting run on a blocking task so large feeds do not stall
/// the async runtime.
///
/// # Errors
/// Returns [`LoadError::Io`] or [`LoadError::Csv`] if the source cannot be
/// read, and [`LoadError::NoValidData`] if no record survives parsing.
pub async fn load<S>(source: &S) -> Result<Series, LoadError>
where
    S: PriceSource + ?Sized,
{
    info!("Loading price series from: {}", source.describe());
    let records = source.fetch_records().await?;
    tokio::task::spawn_blocking(move || parse_records(records)).await?
}

/// Parses raw records into a series, skipping malformed ones.
///
/// # Errors
/// Returns [`LoadError::NoValidData`] if every record is rejected.
pub fn parse_records(
    records: impl IntoIterator<Item = RawRecord>,
) -> Result<Series, LoadError> {
    let mut points = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        match PricePoint::parse(&record.timestamp, &record.price) {
            Ok(point) => points.push(point),
            Err(e) => {
                warn!(line = record.line, error = %e, "Skipping invalid price record");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} invalid rows", skipped);
    }

    let series = Series::new(points)?;
    info!(
        "Loaded {} points from {} to {}",
        series.len(),
        format_instant(&series.first().timestamp),
        format_instant(&series.last().timestamp)
    );
    Ok(series)
}
