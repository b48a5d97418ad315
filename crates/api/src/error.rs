//! API error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::models::ErrorResponse;
use best_trade_data::LoadError;
use best_trade_domain::TradeError;
use tracing::{error, warn};

/// Errors returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required query parameter is absent.
    #[error("{0}")]
    MissingParameter(String),
    /// The query window could not be answered.
    #[error(transparent)]
    Trade(#[from] TradeError),
    /// The price series could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::Trade(_) => StatusCode::BAD_REQUEST,
            Self::Load(LoadError::NoValidData) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listener could not bind.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that failed to bind.
        addr: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Preloading the series failed.
    #[error("Failed to preload price series: {0}")]
    Preload(#[from] LoadError),
    /// The server loop failed.
    #[error("Server error: {0}")]
    Serve(std::io::Error),
}
