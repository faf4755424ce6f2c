//! Artifact Market Panel - Entry Point
//!
//! Initializes configuration, logging and chain connections, then
//! mounts the panel window. Runs until the window closes.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate (missing file falls back to the
//!    current round's built-in defaults)
//! 2. Init tracing (fmt output; RUST_LOG overrides the config level)
//! 3. Connect the xDai RPC provider + validate chain ID
//! 4. Connect the game host (balance reads + change poller)
//! 5. Create the subgraph client (game + market indexers)
//! 6. Create the ABI source and contract registry
//! 7. Mount the panel window (blocks until close)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use artifact_market::adapters::chain::{HttpAbiSource, RpcGameHost, XdaiProvider};
use artifact_market::adapters::graph::GraphClient;
use artifact_market::config::{self, AppConfig};
use artifact_market::panel::MarketPanel;
use artifact_market::ports::abi_source::AbiSource;
use artifact_market::ports::artifact_index::ArtifactIndex;
use artifact_market::ports::game_host::GameHost;
use artifact_market::state::contracts::ContractSpec;
use artifact_market::state::hooks::PanelServices;

fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.panel.log_level)
            }),
        )
        .init();

    info!(
        name = %config.panel.name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Artifact Market panel"
    );

    // ── 3-6. Wire the live adapters on a dedicated runtime ──
    // The desktop launcher owns the main thread, so chain setup and
    // the balance poller live on this runtime instead.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let services = runtime.block_on(wire(&config))?;

    // ── 7. Mount the panel window ───────────────────────────
    let panel = MarketPanel::new(config.panel.name, services);
    panel.run()
}

/// Connect the live adapters and assemble the panel services.
async fn wire(config: &AppConfig) -> Result<PanelServices> {
    let provider = Arc::new(XdaiProvider::connect(&config.chain).await?);

    let player = config.player.parsed()?;
    let poll_interval = Duration::from_secs(config.chain.balance_poll_seconds);
    let host: Arc<dyn GameHost> =
        Arc::new(RpcGameHost::connect(provider, player, poll_interval).await?);

    let market_address = config.contracts.market_parsed()?;
    let index: Arc<dyn ArtifactIndex> =
        Arc::new(GraphClient::new(&config.graph, market_address)?);

    let timeout = Duration::from_secs(config.graph.timeout_seconds);
    let abis: Arc<dyn AbiSource> = Arc::new(HttpAbiSource::new(timeout)?);

    let artifacts_spec = ContractSpec {
        address: config.contracts.artifacts_parsed()?,
        abi_url: config.contracts.artifacts_abi_url.clone(),
    };
    let market_spec = ContractSpec {
        address: market_address,
        abi_url: config.contracts.market_abi_url.clone(),
    };

    Ok(PanelServices::new(
        host,
        index,
        abis,
        artifacts_spec,
        market_spec,
        config.panel.native_symbol.clone(),
    ))
}
