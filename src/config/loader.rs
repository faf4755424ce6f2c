//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.
//! A missing file is not an error: the built-in defaults point at
//! the current round's contracts and public indexers.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// Falls back to [`AppConfig::default`] when the file does not
/// exist, so the panel runs out of the box.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).with_context(|| "Failed to parse config.toml")?
    } else {
        info!(path = %path.display(), "Config file not found, using defaults");
        AppConfig::default()
    };

    validate_config(&config)?;

    info!(
        game_graph = %config.graph.game_url,
        market_graph = %config.graph.market_url,
        chain_id = config.chain.chain_id,
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Parseable contract and player addresses
/// - Non-empty endpoint URLs
/// - Sensible pagination and timing values
fn validate_config(config: &AppConfig) -> Result<()> {
    // Address validation: fail fast on typos, not mid-query
    let player = config.player.parsed()?;
    config.contracts.artifacts_parsed()?;
    config.contracts.market_parsed()?;

    if player.is_zero() {
        warn!("Player address is unset; owned artifacts and listings will be empty");
    }

    // Endpoint validation
    anyhow::ensure!(
        !config.graph.game_url.is_empty(),
        "Game subgraph URL must not be empty"
    );
    anyhow::ensure!(
        !config.graph.market_url.is_empty(),
        "Market subgraph URL must not be empty"
    );
    anyhow::ensure!(
        !config.chain.rpc_url.is_empty(),
        "RPC URL must not be empty"
    );
    anyhow::ensure!(
        !config.contracts.artifacts_abi_url.is_empty(),
        "Artifacts ABI URL must not be empty"
    );
    anyhow::ensure!(
        !config.contracts.market_abi_url.is_empty(),
        "Market ABI URL must not be empty"
    );

    // Pagination validation: the indexer rejects first > 1000
    anyhow::ensure!(
        config.graph.page_size > 0 && config.graph.page_size <= 1000,
        "graph page_size must be in (0, 1000], got {}",
        config.graph.page_size
    );

    // Timing validation
    anyhow::ensure!(
        config.graph.timeout_seconds > 0,
        "graph timeout_seconds must be positive"
    );
    anyhow::ensure!(
        config.chain.balance_poll_seconds > 0,
        "chain balance_poll_seconds must be positive"
    );

    Ok(())
}
