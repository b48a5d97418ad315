//! Loading errors.

use best_trade_domain::SeriesError;

/// Errors that abort loading a price series.
///
/// Malformed individual records are not errors; they are skipped.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source is missing or unreadable.
    #[error("Price source could not be read: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV reader failed irrecoverably.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Every record was skipped, or the source was empty.
    #[error("Price source contains no valid entries.")]
    NoValidData,
    /// The blocking load task panicked or was cancelled.
    #[error("Load task failed: {0}")]
    TaskFailed(String),
}

impl From<SeriesError> for LoadError {
    fn from(err: SeriesError) -> Self {
        match err {
            SeriesError::NoValidData => Self::NoValidData,
        }
    }
}

impl From<tokio::task::JoinError> for LoadError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::TaskFailed(err.to_string())
    }
}
