//! Load-once series storage with atomic reload.

use crate::error::LoadError;
use crate::loader::load;
use crate::sources::PriceSource;
use best_trade_domain::Series;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Holds the current price series for the process.
///
/// The series is loaded on first use and only ever replaced as a whole, so a
/// reader holding an `Arc<Series>` always sees one complete series.
///
/// Loads run one at a time under `loading`; `current` is only write-locked
/// for the swap itself.
pub struct SeriesStore {
    source: Arc<dyn PriceSource>,
    current: RwLock<Option<Arc<Series>>>,
    loading: Mutex<()>,
}

impl SeriesStore {
    /// Creates an empty store backed by `source`.
    pub fn new(source: impl PriceSource + 'static) -> Self {
        Self::from_source(Arc::new(source))
    }

    /// Creates an empty store backed by a shared source.
    pub fn from_source(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            current: RwLock::new(None),
            loading: Mutex::new(()),
        }
    }

    /// Returns the current series, loading it on first use.
    ///
    /// # Errors
    /// Returns an error if the initial load fails; the store stays empty.
    pub async fn current(&self) -> Result<Arc<Series>, LoadError> {
        if let Some(series) = self.current.read().await.as_ref() {
            return Ok(Arc::clone(series));
        }

        let _loading = self.loading.lock().await;
        // Another caller may have finished the load while we waited.
        if let Some(series) = self.current.read().await.as_ref() {
            return Ok(Arc::clone(series));
        }

        let series = Arc::new(load(self.source.as_ref()).await?);
        *self.current.write().await = Some(Arc::clone(&series));
        Ok(series)
    }

    /// Rebuilds the series from the source and swaps it in.
    ///
    /// The new series is fully built before the swap. On failure the previous
    /// series stays in place. Concurrent reloads commit in call order.
    ///
    /// # Errors
    /// Returns the load error if the rebuild fails.
    pub async fn reload(&self) -> Result<Arc<Series>, LoadError> {
        let _loading = self.loading.lock().await;
        let series = match load(self.source.as_ref()).await {
            Ok(series) => Arc::new(series),
            Err(e) => {
                warn!(error = %e, "Reload failed, keeping previous series");
                return Err(e);
            }
        };

        let previous = self.current.write().await.replace(Arc::clone(&series));
        info!(
            points = series.len(),
            replaced = previous.is_some(),
            "Price series swapped in"
        );
        Ok(series)
    }

    /// Drops the current series; the next [`current`](Self::current) reloads.
    pub async fn invalidate(&self) {
        if self.current.write().await.take().is_some() {
            info!("Price series invalidated");
        }
    }

    /// Whether a series is currently held. Does not wait for a load in
    /// progress.
    pub async fn is_loaded(&self) -> bool {
        self.current.read().await.is_some()
    }
}
