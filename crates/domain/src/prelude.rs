//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use best_trade_domain::prelude::*;
//! ```

// Entities
pub use crate::entities::{PricePoint, Series};

// Errors
pub use crate::error::{PointParseError, SeriesError, SizingError, TradeError};

// Operations
pub use crate::scanner::{best_pair, find_best_trade, scan_window};
pub use crate::sizing::{PositionSize, size_position};
pub use crate::time::{format_instant, parse_instant};
pub use crate::validation::validate_window;

// Value objects
pub use crate::value_objects::{TradePair, TradeResult, Window};
