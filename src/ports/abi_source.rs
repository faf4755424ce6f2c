//! ABI Source Port - Contract ABI Retrieval Interface
//!
//! Defines the trait for fetching contract ABIs. The game publishes
//! its ABIs as pinned JSON documents rather than bundling them with
//! clients, so the live adapter is a plain HTTP fetch.

use alloy::json_abi::JsonAbi;
use async_trait::async_trait;

/// Trait for retrieving and parsing contract ABIs.
#[async_trait]
pub trait AbiSource: Send + Sync + 'static {
    /// Fetch and parse the ABI document at `url`.
    async fn fetch_abi(&self, url: &str) -> anyhow::Result<JsonAbi>;
}
