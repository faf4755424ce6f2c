//! RPC Connection - Shared xDai Provider
//!
//! One HTTP provider feeds every on-chain read the panel makes.
//! Connecting verifies the chain id up front, so a config pointed at
//! the wrong network fails at startup instead of rendering balances
//! from some other chain.

use std::sync::Arc;

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::ChainConfig;

/// Shared connection to the game's chain.
///
/// The builder's concrete provider type is a deep stack of filler
/// generics, so the handle is stored type-erased behind
/// `dyn Provider`.
pub struct XdaiProvider {
    provider: Arc<dyn Provider + Send + Sync>,
}

impl XdaiProvider {
    /// Connect to the configured RPC and verify it serves the
    /// expected chain.
    ///
    /// # Errors
    /// Returns an error if the URL doesn't parse, the chain-id query
    /// fails, or the RPC reports a chain other than the configured
    /// one.
    #[instrument(skip_all)]
    pub async fn connect(config: &ChainConfig) -> Result<Self> {
        let url = config.rpc_url.parse().context("Invalid RPC URL")?;
        let provider: Arc<dyn Provider + Send + Sync> =
            Arc::new(ProviderBuilder::new().on_http(url).boxed());

        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;
        anyhow::ensure!(
            chain_id == config.chain_id,
            "RPC at {} serves chain {chain_id}, expected {}",
            config.rpc_url,
            config.chain_id
        );

        info!(chain_id, rpc = %config.rpc_url, "Connected to chain RPC");

        Ok(Self { provider })
    }

    /// Shared handle for chain reads.
    pub fn inner(&self) -> Arc<dyn Provider + Send + Sync> {
        Arc::clone(&self.provider)
    }
}
