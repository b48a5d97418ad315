//! Request handlers.

use crate::error::ApiError;
use crate::models::{BestTradeQuery, ErrorResponse, HealthResponse, ReloadResponse};
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use best_trade_domain::time::format_instant;
use best_trade_domain::{TradeResult, find_best_trade};
use tracing::debug;
use utoipa::OpenApi;

/// Finds the most profitable buy/sell pair in the requested window.
#[utoipa::path(
    get,
    path = "/api/v1/best-trade",
    tag = "Trades",
    params(BestTradeQuery),
    responses(
        (status = 200, description = "Best trade, all fields null if none", body = TradeResult),
        (status = 400, description = "Missing or invalid window", body = ErrorResponse),
        (status = 422, description = "Price source has no valid entries", body = ErrorResponse),
        (status = 500, description = "Price source could not be read", body = ErrorResponse)
    )
)]
pub async fn best_trade(
    State(state): State<AppState>,
    Query(query): Query<BestTradeQuery>,
) -> Result<Json<TradeResult>, ApiError> {
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    let (Some(start), Some(end)) = (non_empty(query.start), non_empty(query.end)) else {
        return Err(ApiError::MissingParameter(
            "Start and end time are required.".to_string(),
        ));
    };

    let series = state.store.current().await?;
    let result = find_best_trade(&series, &start, &end)?;
    debug!(%start, %end, profitable = result.is_profitable(), "Best trade computed");
    Ok(Json(result))
}

/// Rebuilds the price series from its source.
#[utoipa::path(
    post,
    path = "/api/v1/reload",
    tag = "Trades",
    responses(
        (status = 200, description = "Series rebuilt and swapped in", body = ReloadResponse),
        (status = 422, description = "Price source has no valid entries", body = ErrorResponse),
        (status = 500, description = "Price source could not be read", body = ErrorResponse)
    )
)]
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let series = state.store.reload().await?;
    Ok(Json(ReloadResponse {
        points: series.len(),
        first_timestamp: format_instant(&series.first().timestamp),
        last_timestamp: format_instant(&series.last().timestamp),
    }))
}

/// Health check.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        series_loaded: state.store.is_loaded().await,
    })
}

/// Serves the OpenAPI document.
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
