//! Price series loading and process-scoped series storage.
//!
//! This crate provides:
//! - The [`PriceSource`] abstraction over raw `(timestamp, price)` feeds
//! - A CSV file source and an in-memory source
//! - The loader that turns raw records into a validated [`Series`]
//! - [`SeriesStore`], which loads once and swaps in reloads atomically
//!
//! [`Series`]: best_trade_domain::Series

/// Error types.
pub mod error;
/// Record parsing and series construction.
pub mod loader;
/// Raw price sources.
pub mod sources;
/// Load-once series storage with atomic reload.
pub mod store;

pub use error::LoadError;
pub use loader::{load, parse_records};
pub use sources::{CsvFileSource, MemorySource, PriceSource, RawRecord};
pub use store::SeriesStore;
