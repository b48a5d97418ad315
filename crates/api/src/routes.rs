//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the application router.
///
/// - `GET  /api/health`
/// - `GET  /api/openapi.json`
/// - `GET  /api/v1/best-trade?start=..&end=..`
/// - `POST /api/v1/reload`
pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/best-trade", get(handlers::best_trade))
        .route("/reload", post(handlers::reload));

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/openapi.json", get(handlers::openapi_spec))
        .nest("/api/v1", v1)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
