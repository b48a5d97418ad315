//! Core domain types and algorithms for best-trade search.
//!
//! This crate provides the synchronous, I/O-free core:
//! - Price points and the immutable, time-ordered price series
//! - Instant parsing and normalized ISO-8601 formatting
//! - Query window validation against the series bounds
//! - The single-pass maximum-profit scanner
//! - Position sizing from available funds

/// Prelude module for convenient imports.
pub mod prelude;

/// Domain entities.
pub mod entities;
/// Error types.
pub mod error;
/// Single-pass best trade scanner.
pub mod scanner;
/// Position sizing from funds.
pub mod sizing;
/// Instant parsing and formatting.
pub mod time;
/// Query window validation.
pub mod validation;
/// Value objects.
pub mod value_objects;

pub use entities::{PricePoint, Series};
pub use error::{PointParseError, SeriesError, SizingError, TradeError};
pub use scanner::{best_pair, find_best_trade, scan_window};
pub use sizing::{PositionSize, size_position};
pub use validation::validate_window;
pub use value_objects::{TradePair, TradeResult, Window};
