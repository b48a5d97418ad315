//! Server configuration and startup.

use crate::error::ServerError;
use crate::routes::create_router;
use crate::state::AppState;
use axum::Router;
use best_trade_data::{CsvFileSource, SeriesStore};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// CSV file backing the price series.
    pub data_path: PathBuf,
    /// Allow cross-origin requests from any origin.
    pub permissive_cors: bool,
    /// Load the series before accepting requests.
    pub preload: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_path: PathBuf::from("price_data.csv"),
            permissive_cors: true,
            preload: true,
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from `HOST`, `PORT` and `PRICE_DATA_PATH`,
    /// falling back to defaults for unset or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT value: {}", raw);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            data_path: env::var("PRICE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            ..defaults
        }
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP server for best-trade queries.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Creates a server reading prices from the configured CSV file.
    pub fn new(config: ServerConfig) -> Self {
        let store = SeriesStore::new(CsvFileSource::new(config.data_path.clone()));
        Self::with_store(config, Arc::new(store))
    }

    /// Creates a server over an existing series store.
    pub fn with_store(config: ServerConfig, store: Arc<SeriesStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    /// Builds the router with all configured layers.
    pub fn router(&self) -> Router {
        let router = create_router(self.state.clone());
        if self.config.permissive_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Runs the server until Ctrl-C.
    ///
    /// # Errors
    /// Returns an error if preloading fails, the address cannot be bound, or
    /// the server loop fails.
    pub async fn run(self) -> Result<(), ServerError> {
        if self.config.preload {
            let series = self.state.store.current().await?;
            info!("Preloaded {} price points", series.len());
        }

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        info!("Server running on http://{}/api", addr);
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
