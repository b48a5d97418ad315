//! In-memory price source.

use super::{PriceSource, RawRecord};
use crate::error::LoadError;
use async_trait::async_trait;
use std::sync::RwLock;

/// Serves a fixed, replaceable list of raw records.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: RwLock<Vec<RawRecord>>,
}

impl MemorySource {
    /// Creates a source serving `records`.
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Builds records from `(timestamp, price)` text pairs, numbering lines from 1.
    pub fn from_pairs<T, P>(pairs: impl IntoIterator<Item = (T, P)>) -> Self
    where
        T: Into<String>,
        P: Into<String>,
    {
        let records = pairs
            .into_iter()
            .zip(1u64..)
            .map(|((timestamp, price), line)| RawRecord::new(line, timestamp, price))
            .collect();
        Self::new(records)
    }

    /// Replaces the served records; later fetches see the new list.
    pub fn replace(&self, records: Vec<RawRecord>) {
        let mut guard = self
            .records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = records;
    }
}

#[async_trait]
impl PriceSource for MemorySource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, LoadError> {
        let guard = self
            .records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn describe(&self) -> String {
        "in-memory records".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_pairs_numbers_lines() {
        let source = MemorySource::from_pairs([("2025-07-05", "1"), ("2025-07-06", "2")]);
        let records = source.fetch_records().await.unwrap();
        assert_eq!(records[0], RawRecord::new(1, "2025-07-05", "1"));
        assert_eq!(records[1], RawRecord::new(2, "2025-07-06", "2"));
    }

    #[tokio::test]
    async fn test_replace() {
        let source = MemorySource::from_pairs([("2025-07-05", "1")]);
        source.replace(vec![RawRecord::new(1, "2025-07-07", "3")]);
        let records = source.fetch_records().await.unwrap();
        assert_eq!(records, vec![RawRecord::new(1, "2025-07-07", "3")]);
    }
}
