//! Configuration Module - TOML-based Panel Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! All contract addresses, subgraph endpoints and chain parameters
//! are externalized here - nothing is hardcoded in the domain layer.
//! Every field has a default matching the current game round, so a
//! missing config file still produces a runnable panel.

pub mod loader;

use std::str::FromStr;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level panel configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the panel window opens.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Panel identity and presentation.
    pub panel: PanelConfig,
    /// Player identity.
    pub player: PlayerConfig,
    /// Subgraph indexer endpoints.
    pub graph: GraphConfig,
    /// Chain RPC configuration.
    pub chain: ChainConfig,
    /// Game contract addresses and ABI locations.
    pub contracts: ContractsConfig,
}

/// Panel identity configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Window title.
    pub name: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Display symbol for the chain's native token.
    pub native_symbol: String,
}

/// Player identity configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// The player's burner wallet address (0x-prefixed hex).
    pub address: String,
}

/// Subgraph endpoint configuration.
///
/// The game indexer serves artifact metadata; the market indexer
/// serves listing state. Both are plain GraphQL-over-HTTP endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Game subgraph URL (artifact ownership and stats).
    pub game_url: String,
    /// Market subgraph URL (listed tokens and prices).
    pub market_url: String,
    /// Entities fetched per page. The indexer caps single responses,
    /// so larger collections are walked with first/skip.
    pub page_size: usize,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Chain RPC configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// xDai RPC endpoint.
    pub rpc_url: String,
    /// Expected chain ID. Startup fails if the RPC reports another.
    pub chain_id: u64,
    /// Native balance poll interval in seconds.
    pub balance_poll_seconds: u64,
}

/// Game contract configuration.
///
/// The artifacts address rotates every game round; the market
/// contract is long-lived. Both ABIs are fetched from pinned gists
/// rather than bundled, matching how the game distributes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// Artifacts (ERC-721) contract address. Must be updated when a
    /// new round starts.
    pub artifacts_address: String,
    /// URL serving the artifacts approval ABI as JSON.
    pub artifacts_abi_url: String,
    /// Market contract address.
    pub market_address: String,
    /// URL serving the market ABI as JSON.
    pub market_abi_url: String,
}

impl PlayerConfig {
    /// Parse the configured player address.
    ///
    /// # Errors
    /// Returns an error if the address is not valid 0x-prefixed hex.
    pub fn parsed(&self) -> Result<Address> {
        Address::from_str(&self.address)
            .with_context(|| format!("Invalid player address: {}", self.address))
    }
}

impl ContractsConfig {
    /// Parse the artifacts contract address.
    ///
    /// # Errors
    /// Returns an error if the address is not valid 0x-prefixed hex.
    pub fn artifacts_parsed(&self) -> Result<Address> {
        Address::from_str(&self.artifacts_address)
            .with_context(|| format!("Invalid artifacts address: {}", self.artifacts_address))
    }

    /// Parse the market contract address.
    ///
    /// # Errors
    /// Returns an error if the address is not valid 0x-prefixed hex.
    pub fn market_parsed(&self) -> Result<Address> {
        Address::from_str(&self.market_address)
            .with_context(|| format!("Invalid market address: {}", self.market_address))
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            name: default_panel_name(),
            log_level: default_log_level(),
            native_symbol: default_native_symbol(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            address: default_player_address(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            game_url: default_game_graph_url(),
            market_url: default_market_graph_url(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            chain_id: default_chain_id(),
            balance_poll_seconds: default_balance_poll(),
        }
    }
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            artifacts_address: default_artifacts_address(),
            artifacts_abi_url: default_artifacts_abi_url(),
            market_address: default_market_address(),
            market_abi_url: default_market_abi_url(),
        }
    }
}

// Default value functions for serde

fn default_panel_name() -> String {
    "Artifact Market".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_native_symbol() -> String {
    "xDai".to_string()
}

fn default_player_address() -> String {
    format!("{:#x}", Address::ZERO)
}

fn default_game_graph_url() -> String {
    "https://api.thegraph.com/subgraphs/name/darkforest-eth/dark-forest-v06-round-2".to_string()
}

fn default_market_graph_url() -> String {
    "https://api.thegraph.com/subgraphs/name/zk-farts/dfartifactmarket".to_string()
}

fn default_page_size() -> usize {
    100
}

fn default_timeout() -> u64 {
    30
}

fn default_rpc_url() -> String {
    "https://rpc.gnosischain.com".to_string()
}

fn default_chain_id() -> u64 {
    100
}

fn default_balance_poll() -> u64 {
    5
}

fn default_artifacts_address() -> String {
    "0xafb1A0C81c848Ad530766aD4BE2fdddC833e1e96".to_string()
}

fn default_artifacts_abi_url() -> String {
    "https://gist.githubusercontent.com/zk-FARTs/d5d9f3fc450476b40fd12832298bb54c/raw/1cac7c4638ee5d766615afe4362e6ce80ed68067/APPROVAL_ABI.json".to_string()
}

fn default_market_address() -> String {
    "0x3Fb840EbD1fFdD592228f7d23e9CA8D55F72F2F8".to_string()
}

fn default_market_abi_url() -> String {
    "https://gist.githubusercontent.com/zk-FARTs/5761e33760932affcbc3b13dd28f6925/raw/afd3c6d8eba7c27148afc9092bfe411d061d58a3/MARKET_ABI.json".to_string()
}
