//! Application state.

use best_trade_data::SeriesStore;
use std::sync::Arc;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide price series.
    pub store: Arc<SeriesStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: Arc<SeriesStore>) -> Self {
        Self { store }
    }
}
