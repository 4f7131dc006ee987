//! API route handlers for the gateway.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use folio_core::error::FolioError;
use folio_search::engine::{SearchRequest, SearchResponse};

use super::server::AppState;

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "folio-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// System information endpoint.
pub async fn system_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let uptime = state.start_time.elapsed();
    Json(serde_json::json!({
        "name": "Folio",
        "version": env!("CARGO_PKG_VERSION"),
        "platform": format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        "uptime_secs": uptime.as_secs(),
        "gateway": {
            "host": state.config.gateway.host,
            "port": state.config.gateway.port,
        },
        "search": {
            "lines_per_page": state.config.search.lines_per_page,
            "context_lines": state.config.search.context_lines,
            "max_document_bytes": state.config.search.max_document_bytes,
        }
    }))
}

/// In-document search endpoint.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> std::result::Result<Json<SearchResponse>, ApiError> {
    let resp = state.engine.search(&req).await?;
    Ok(Json(resp))
}

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub transcript: String,
}

/// Voice command endpoint — maps a transcript to a typed reader command.
pub async fn voice_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoiceRequest>,
) -> Json<serde_json::Value> {
    match state.commands.parse(&req.transcript) {
        Some(cmd) => Json(serde_json::json!({ "recognized": true, "action": cmd })),
        None => Json(serde_json::json!({ "recognized": false })),
    }
}

/// Maps pipeline errors onto HTTP status codes with a JSON body.
#[derive(Debug)]
pub struct ApiError(FolioError);

impl From<FolioError> for ApiError {
    fn from(e: FolioError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FolioError::ContentUnavailable(_) => StatusCode::NOT_FOUND,
            FolioError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            FolioError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!("⚠️ Request failed: {}", self.0);
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
