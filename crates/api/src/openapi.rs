//! OpenAPI documentation.

use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse, ReloadResponse};
use best_trade_domain::TradeResult;
use utoipa::OpenApi;

/// OpenAPI document for the best-trade service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Best Trade API",
        version = "0.1.0",
        description = "Finds the most profitable single buy/sell pair in a window \
                       of a timestamped price series.",
        license(name = "MIT OR Apache-2.0")
    ),
    tags(
        (name = "Trades", description = "Best-trade search and series reload"),
        (name = "Health", description = "Health check")
    ),
    paths(handlers::best_trade, handlers::reload, handlers::health),
    components(schemas(TradeResult, HealthResponse, ReloadResponse, ErrorResponse))
)]
pub struct ApiDoc;

/// Returns the OpenAPI document as pretty-printed JSON.
#[must_use]
pub fn openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_default()
}
