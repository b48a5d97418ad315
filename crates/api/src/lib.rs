//! REST API server and endpoints.
//!
//! This crate exposes the best-trade search over HTTP:
//! - Best trade query for a `[start, end]` window
//! - Atomic reload of the backing price series
//! - Health check
//! - OpenAPI document at `/api/openapi.json`
//! - Request logging and permissive CORS

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// OpenAPI documentation.
pub mod openapi;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::{ApiError, ServerError};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;
