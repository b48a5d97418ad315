//! Synthetic price data generation.

use anyhow::{Context, Result, ensure};
use chrono::{DateTime, TimeDelta, Utc};
use clap::ValueEnum;
use rand::Rng;
use std::fs::OpenOptions;
use std::path::Path;

/// Shape of the generated price curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Uniform random prices between min and max.
    Random,
    /// Rising by one cent per row from min, holding at max.
    Ascending,
    /// Falling by one cent per row from max, holding at min.
    Descending,
    /// Constant at min.
    Flat,
}

/// Generator settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rows to produce.
    pub rows: usize,
    /// Timestamp of the first row.
    pub start: DateTime<Utc>,
    /// Lowest price generated.
    pub min_price: f64,
    /// Highest price generated.
    pub max_price: f64,
    /// Seconds between consecutive rows.
    pub interval_secs: i64,
    /// Shape of the price curve.
    pub pattern: Pattern,
}

/// Generates `(timestamp, price)` rows with prices rounded to cents.
///
/// # Errors
/// Returns an error if a price bound is not finite, the bounds are inverted,
/// or timestamps overflow.
pub fn generate_rows<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<(DateTime<Utc>, f64)>> {
    ensure!(
        config.min_price.is_finite() && config.max_price.is_finite(),
        "price bounds must be finite, got {} and {}",
        config.min_price,
        config.max_price
    );
    ensure!(
        config.min_price <= config.max_price,
        "min price {} is above max price {}",
        config.min_price,
        config.max_price
    );

    let mut rows = Vec::with_capacity(config.rows);
    for i in 0..config.rows {
        let offset = i64::try_from(i)
            .ok()
            .and_then(|i| i.checked_mul(config.interval_secs))
            .and_then(TimeDelta::try_seconds)
            .context("timestamp offset overflow")?;
        let timestamp = config
            .start
            .checked_add_signed(offset)
            .context("timestamp out of range")?;

        let step = i as f64 / 100.0;
        let price = match config.pattern {
            Pattern::Random => rng.random_range(config.min_price..=config.max_price),
            Pattern::Ascending => (config.min_price + step).min(config.max_price),
            Pattern::Descending => (config.max_price - step).max(config.min_price),
            Pattern::Flat => config.min_price,
        };
        rows.push((timestamp, round_cents(price)));
    }
    Ok(rows)
}

/// Appends rows to a CSV file, writing a `timestamp,price` header first when
/// the file is new or empty.
///
/// # Errors
/// Returns an error if the file cannot be opened or written.
pub fn append_rows(path: &Path, rows: &[(DateTime<Utc>, f64)]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::Writer::from_writer(file);
    if needs_header {
        writer.write_record(["timestamp", "price"])?;
    }
    for (timestamp, price) in rows {
        writer.write_record([
            timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            format!("{price:.2}"),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
