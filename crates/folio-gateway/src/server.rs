//! HTTP server — axum router and shared application state.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use folio_core::config::FolioConfig;
use folio_core::error::{FolioError, Result};
use folio_search::command::CommandParser;
use folio_search::engine::SearchEngine;
use folio_search::loader::ContentLoader;

use crate::routes;

/// Shared state for all request handlers.
pub struct AppState {
    pub config: FolioConfig,
    pub start_time: Instant,
    pub engine: SearchEngine,
    pub commands: CommandParser,
}

impl AppState {
    pub fn new(config: FolioConfig) -> Result<Self> {
        let loader = ContentLoader::new(
            config.search.max_document_bytes,
            config.search.fetch_timeout_secs,
        )?;
        let engine = SearchEngine::new(loader, config.search.clone());
        Ok(Self {
            config,
            start_time: Instant::now(),
            engine,
            commands: CommandParser::new(),
        })
    }
}

/// Builds the API router with trace and CORS middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health_check))
        .route("/api/info", get(routes::system_info))
        .route("/api/search", post(routes::search))
        .route("/api/voice", post(routes::voice_command))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds and serves until the process is stopped.
pub async fn serve(config: FolioConfig) -> Result<()> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let state = Arc::new(AppState::new(config)?);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::Gateway(format!("Bind {addr} failed: {e}")))?;
    tracing::info!("🚀 Gateway listening on http://{addr}");

    axum::serve(listener, router)
        .await
        .map_err(|e| FolioError::Gateway(e.to_string()))
}
