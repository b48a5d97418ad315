//! Raw price sources.
//!
//! A source hands over every raw record at once; the loader never exposes a
//! partially read feed.

mod csv_file;
mod memory;

pub use csv_file::CsvFileSource;
pub use memory::MemorySource;

use crate::error::LoadError;
use async_trait::async_trait;

/// One unparsed `(timestamp, price)` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line in the source, used in skip warnings.
    pub line: u64,
    /// Timestamp text.
    pub timestamp: String,
    /// Price text.
    pub price: String,
}

impl RawRecord {
    /// Creates a new raw record.
    pub fn new(line: u64, timestamp: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            line,
            timestamp: timestamp.into(),
            price: price.into(),
        }
    }
}

/// A feed of raw price records.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Reads the whole feed.
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read.
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, LoadError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}
