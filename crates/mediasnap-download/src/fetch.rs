//! Network fetch port

use async_trait::async_trait;

use crate::{DownloadError, Result};

/// Byte-fetching capability.
///
/// Single shot: no retries and no timeout beyond the transport's own.
/// Retry and backoff policy belongs to the host's transport, not here.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// `reqwest`-backed fetcher for hosts without their own transport.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DownloadError::Fetch(format!("HTTP {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::Fetch(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
