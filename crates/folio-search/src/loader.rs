//! Content loader — resolves a document locator to its raw UTF-8 text.
//!
//! A locator starting with an HTTP scheme is fetched over the network with a
//! bounded timeout and an enforced size cap; a `file://` prefix is stripped;
//! anything else is read from the local filesystem. No retries — a transient
//! failure fails the whole search request.

use folio_core::error::{FolioError, Result};
use std::time::Duration;

pub struct ContentLoader {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ContentLoader {
    pub fn new(max_bytes: usize, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FolioError::Http(format!("Client build failed: {e}")))?;
        Ok(Self { client, max_bytes })
    }

    /// Load the full document text for a locator.
    pub async fn load(&self, locator: &str) -> Result<String> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            self.fetch_remote(locator).await
        } else {
            let path = locator.strip_prefix("file://").unwrap_or(locator);
            self.read_local(path).await
        }
    }

    async fn read_local(&self, path: &str) -> Result<String> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| FolioError::ContentUnavailable(format!("{path}: {e}")))?;
        if meta.len() > self.max_bytes as u64 {
            return Err(FolioError::ContentUnavailable(format!(
                "{path}: document exceeds {} byte limit",
                self.max_bytes
            )));
        }
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FolioError::ContentUnavailable(format!("{path}: {e}")))
    }

    async fn fetch_remote(&self, locator: &str) -> Result<String> {
        let parsed = url::Url::parse(locator)
            .map_err(|e| FolioError::ContentUnavailable(format!("{locator}: {e}")))?;

        let mut resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FolioError::Timeout(format!("{locator}: {e}"))
                } else {
                    FolioError::ContentUnavailable(format!("{locator}: {e}"))
                }
            })?;

        if !resp.status().is_success() {
            return Err(FolioError::ContentUnavailable(format!(
                "{locator}: HTTP {}",
                resp.status()
            )));
        }

        // Streaming read so the size cap holds even without a Content-Length.
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(|e| {
            if e.is_timeout() {
                FolioError::Timeout(format!("{locator}: {e}"))
            } else {
                FolioError::ContentUnavailable(format!("{locator}: {e}"))
            }
        })? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(FolioError::ContentUnavailable(format!(
                    "{locator}: document exceeds {} byte limit",
                    self.max_bytes
                )));
            }
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body)
            .map_err(|e| FolioError::ContentUnavailable(format!("{locator}: not valid UTF-8: {e}")))
    }
}
