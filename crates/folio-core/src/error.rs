//! Unified error types for Folio.

use thiserror::Error;

/// Result type alias using FolioError.
pub type Result<T> = std::result::Result<T, FolioError>;

#[derive(Error, Debug)]
pub enum FolioError {
    // Content loading errors
    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),

    // Query errors. Blank queries are answered with an empty result set
    // instead of this variant; it exists for stricter future validation.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // Search pipeline errors
    #[error("Search error: {0}")]
    Search(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // Gateway errors
    #[error("Gateway error: {0}")]
    Gateway(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    pub fn content_unavailable(msg: impl Into<String>) -> Self {
        Self::ContentUnavailable(msg.into())
    }

    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    pub fn search(msg: impl Into<String>) -> Self {
        Self::Search(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        Self::Gateway(msg.into())
    }
}
