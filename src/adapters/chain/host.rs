//! Game Host Adapter - RPC-backed Wallet Capabilities
//!
//! Implements the `GameHost` port against a plain RPC connection.
//! Inside the game client these capabilities come from the client
//! runtime; standalone, the panel reads them from the chain itself.
//!
//! Balance changes are detected by polling and published on a watch
//! channel as raw wei strings. Consumers re-read `native_balance`
//! on notification rather than parsing the wei payload, so one
//! normalized path produces every displayed value.

use std::sync::Arc;
use std::time::Duration;

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

use crate::ports::game_host::{ContractHandle, GameHost};

use super::provider::XdaiProvider;

/// Number of wei in one native token.
const WEI_PER_NATIVE: f64 = 1e18;

/// RPC-backed implementation of the game host capabilities.
pub struct RpcGameHost {
    /// Shared xDai RPC provider.
    provider: Arc<XdaiProvider>,
    /// The player's burner wallet address.
    player: Address,
    /// Receiver prototype for balance notifications. The poller task
    /// owns the sender.
    balance_rx: watch::Receiver<String>,
    /// Background balance poller.
    poller: tokio::task::JoinHandle<()>,
}

impl RpcGameHost {
    /// Connect the host and start the balance poller.
    ///
    /// # Errors
    /// Returns an error if the initial balance query fails.
    #[instrument(skip_all)]
    pub async fn connect(
        provider: Arc<XdaiProvider>,
        player: Address,
        poll_interval: Duration,
    ) -> Result<Self> {
        let initial = provider
            .inner()
            .get_balance(player)
            .await
            .context("Failed to query player balance")?;

        let (tx, rx) = watch::channel(initial.to_string());
        let poller = tokio::spawn(poll_balance(provider.inner(), player, tx, poll_interval));

        info!(player = %player, balance_wei = %initial, "Game host connected");

        Ok(Self {
            provider,
            player,
            balance_rx: rx,
            poller,
        })
    }
}

impl Drop for RpcGameHost {
    fn drop(&mut self) {
        self.poller.abort();
    }
}

#[async_trait]
impl GameHost for RpcGameHost {
    fn player_address(&self) -> Address {
        self.player
    }

    #[instrument(skip(self))]
    async fn native_balance(&self) -> Result<f64> {
        let wei = self
            .provider
            .inner()
            .get_balance(self.player)
            .await
            .context("Failed to query native balance")?;

        Ok(wei_to_f64(wei))
    }

    fn balance_updates(&self) -> watch::Receiver<String> {
        self.balance_rx.clone()
    }

    #[instrument(skip(self, abi))]
    async fn load_contract(&self, address: Address, abi: JsonAbi) -> Result<ContractHandle> {
        // Validate the contract exists on-chain before handing out a
        // handle; a stale address from a previous round fails here.
        let code = self
            .provider
            .inner()
            .get_code_at(address)
            .await
            .context(format!("Failed to query code at {address}"))?;

        if code.is_empty() {
            bail!("Contract at {address} has no deployed code - check config.toml");
        }

        info!(address = %address, functions = abi.functions.len(), "Loaded contract");

        Ok(ContractHandle::new(address, abi))
    }
}

/// Poll the player balance and notify on change.
async fn poll_balance(
    provider: Arc<dyn Provider + Send + Sync>,
    player: Address,
    tx: watch::Sender<String>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match provider.get_balance(player).await {
            Ok(balance) => {
                let wei = balance.to_string();
                let changed = tx.send_if_modified(|current| {
                    if *current == wei {
                        false
                    } else {
                        *current = wei;
                        true
                    }
                });

                if changed {
                    debug!(balance_wei = %balance, "Player balance changed");
                }
            }
            Err(e) => warn!(error = %e, "Balance poll failed"),
        }
    }
}

/// Convert a wei balance to whole native tokens.
fn wei_to_f64(wei: U256) -> f64 {
    wei.to_string().parse::<f64>().unwrap_or_default() / WEI_PER_NATIVE
}
