//! API request/response models.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters of the best-trade endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BestTradeQuery {
    /// Window start, ISO-8601. UTC when no offset is given.
    #[param(example = "2025-07-01T10:00:40Z")]
    pub start: Option<String>,
    /// Window end, ISO-8601. UTC when no offset is given.
    #[param(example = "2025-07-01T12:00:00Z")]
    pub end: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Whether the price series has been loaded.
    pub series_loaded: bool,
}

/// Result of a series reload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    /// Number of points in the new series.
    pub points: usize,
    /// First timestamp, ISO-8601.
    pub first_timestamp: String,
    /// Last timestamp, ISO-8601.
    pub last_timestamp: String,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// HTTP status code.
    pub code: u16,
}
