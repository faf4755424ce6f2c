//! Contract Registry - Cached Contract Loading
//!
//! Loading a contract costs an ABI fetch plus an on-chain code
//! check, so each contract loads at most once per panel lifetime.
//! Concurrent first requests coalesce into a single load; a failed
//! load leaves the slot empty so the next mount can retry.

use std::sync::Arc;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use tracing::info;

use crate::ports::abi_source::AbiSource;
use crate::ports::game_host::{ContractHandle, GameHost};

/// The two contracts the panel works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKey {
    /// The round's artifacts (ERC-721) contract.
    Artifacts,
    /// The long-lived market contract.
    Market,
}

impl std::fmt::Display for ContractKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Artifacts => write!(f, "artifacts-contract"),
            Self::Market => write!(f, "market-contract"),
        }
    }
}

/// Where to find a contract and its ABI.
#[derive(Debug, Clone)]
pub struct ContractSpec {
    /// On-chain address.
    pub address: Address,
    /// URL serving the ABI document.
    pub abi_url: String,
}

/// One registry slot: a spec plus its load-once cell.
struct Slot {
    spec: ContractSpec,
    cell: OnceCell<Arc<ContractHandle>>,
}

impl Slot {
    fn new(spec: ContractSpec) -> Self {
        Self {
            spec,
            cell: OnceCell::new(),
        }
    }
}

/// Loads and caches the panel's contract handles.
pub struct ContractRegistry {
    host: Arc<dyn GameHost>,
    abis: Arc<dyn AbiSource>,
    artifacts: Slot,
    market: Slot,
}

impl ContractRegistry {
    /// Create a registry over the two contract specs.
    pub fn new(
        host: Arc<dyn GameHost>,
        abis: Arc<dyn AbiSource>,
        artifacts: ContractSpec,
        market: ContractSpec,
    ) -> Self {
        Self {
            host,
            abis,
            artifacts: Slot::new(artifacts),
            market: Slot::new(market),
        }
    }

    /// Get a contract handle, loading it on first use.
    ///
    /// # Errors
    /// Returns an error if the ABI fetch or the on-chain check fails.
    /// The slot stays empty on failure, so a later call retries.
    pub async fn get_or_load(&self, key: ContractKey) -> Result<Arc<ContractHandle>> {
        let slot = match key {
            ContractKey::Artifacts => &self.artifacts,
            ContractKey::Market => &self.market,
        };

        slot
            .cell
            .get_or_try_init(|| self.load(key, &slot.spec))
            .await
            .map(Arc::clone)
    }

    /// Fetch the ABI and validate the address, producing a handle.
    async fn load(&self, key: ContractKey, spec: &ContractSpec) -> Result<Arc<ContractHandle>> {
        info!(contract = %key, address = %spec.address, "Loading contract");

        let abi = self
            .abis
            .fetch_abi(&spec.abi_url)
            .await
            .with_context(|| format!("Failed to fetch ABI for {key}"))?;

        let handle = self
            .host
            .load_contract(spec.address, abi)
            .await
            .with_context(|| format!("Failed to load {key}"))?;

        Ok(Arc::new(handle))
    }
}
