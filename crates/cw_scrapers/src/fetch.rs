use async_trait::async_trait;
use cw_core::{Error, Result};
use reqwest::Client;
use tracing::debug;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the body. Connection failures and non-2xx statuses are `Error::Network`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Single-request fetcher. No retries and only the transport's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("HTTP {} from {}", status, url)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("failed to read body from {}: {}", url, e)))?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
