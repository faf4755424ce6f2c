//! HTTP ABI Source - Pinned ABI Document Fetching
//!
//! The game publishes contract ABIs as pinned JSON documents (gists)
//! instead of bundling them with clients, so loading a contract
//! starts with a plain HTTP fetch. Parsing goes straight into
//! alloy's `JsonAbi`, which accepts the standard ABI array format.

use std::time::Duration;

use alloy::json_abi::JsonAbi;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::ports::abi_source::AbiSource;

/// Fetches ABI documents over HTTP.
pub struct HttpAbiSource {
    /// Underlying HTTP client.
    http: Client,
}

impl HttpAbiSource {
    /// Create a source with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client can't be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl AbiSource for HttpAbiSource {
    async fn fetch_abi(&self, url: &str) -> Result<JsonAbi> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch ABI from {url}"))?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "ABI fetch from {url} returned {status}");

        let abi: JsonAbi = response
            .json()
            .await
            .with_context(|| format!("Failed to parse ABI JSON from {url}"))?;

        debug!(url, functions = abi.functions.len(), "Fetched contract ABI");

        Ok(abi)
    }
}
