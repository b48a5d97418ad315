//! CSV file price source.

use super::{PriceSource, RawRecord};
use crate::error::LoadError;
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reads `timestamp,price` rows from a CSV file.
///
/// Columns are located by a `timestamp`/`price` header when the first row
/// has one; otherwise the first two columns are used and the first row is
/// treated as data.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    /// Creates a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PriceSource for CsvFileSource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, LoadError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_records(&path)).await?
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Column positions of the timestamp and price fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    timestamp: usize,
    price: usize,
}

impl Columns {
    const POSITIONAL: Self = Self {
        timestamp: 0,
        price: 1,
    };

    fn from_header(record: &StringRecord) -> Option<Self> {
        let position = |name: &str| {
            record.iter().position(|field| {
                field
                    .trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(name)
            })
        };
        Some(Self {
            timestamp: position("timestamp")?,
            price: position("price")?,
        })
    }
}

fn read_records(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut columns: Option<Columns> = None;
    let mut records = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(row = index + 1, error = %e, "Skipping unreadable CSV row");
                continue;
            }
        };
        let line = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());

        let cols = match columns {
            Some(cols) => cols,
            None => {
                if let Some(header) = Columns::from_header(&record) {
                    debug!(?header, "Detected CSV header");
                    columns = Some(header);
                    continue;
                }
                debug!("No CSV header, reading columns positionally");
                columns = Some(Columns::POSITIONAL);
                Columns::POSITIONAL
            }
        };

        match (record.get(cols.timestamp), record.get(cols.price)) {
            (Some(timestamp), Some(price)) => records.push(RawRecord::new(line, timestamp, price)),
            _ => warn!(line, "Skipping CSV row with missing fields"),
        }
    }

    Ok(records)
}
