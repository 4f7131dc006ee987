//! Configuration — config.toml with serde defaults for every knob.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FolioError, Result};

/// Top-level configuration, loaded from config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// HTTP gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Search pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Lines per display page. The reader UI has always assumed 30; kept as
    /// the default, but page numbers are an approximation for documents with
    /// real pagination metadata.
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
    /// Context lines shown on each side of a hit.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    /// Largest document the loader will accept, in bytes.
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
    /// Remote fetch timeout in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lines_per_page: default_lines_per_page(),
            context_lines: default_context_lines(),
            max_document_bytes: default_max_document_bytes(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    7700
}

fn default_lines_per_page() -> usize {
    30
}

fn default_context_lines() -> usize {
    2
}

fn default_max_document_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl FolioConfig {
    /// Default config path: ~/.folio/config.toml
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".folio").join("config.toml")
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)
            .map_err(|e| FolioError::Config(format!("Parse error in {}: {e}", path.display())))?;
        tracing::debug!("📖 Config loaded from {}", path.display());
        Ok(config)
    }

    /// Load from the given path, falling back to defaults when absent.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("No config at {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Serialize error: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
