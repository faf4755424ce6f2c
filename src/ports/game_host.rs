//! Game Host Port - Player Wallet and Contract Interface
//!
//! Defines the trait for the capabilities the game client normally
//! provides to a panel: the player's identity, their native balance,
//! balance change notifications and contract instantiation. The live
//! adapter talks to an xDai RPC via alloy-rs; tests substitute doubles.

use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use async_trait::async_trait;
use tokio::sync::watch;

/// A loaded contract: an address paired with its parsed ABI.
///
/// The handle can encode calldata for any function in the ABI but
/// never submits transactions itself; submission stays with the
/// player's wallet flow.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    address: Address,
    abi: JsonAbi,
}

impl ContractHandle {
    /// Pair an address with its ABI.
    pub const fn new(address: Address, abi: JsonAbi) -> Self {
        Self { address, abi }
    }

    /// The contract's on-chain address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The parsed ABI.
    pub const fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Whether the ABI declares a function with this name.
    pub fn has_function(&self, name: &str) -> bool {
        self.abi.function(name).is_some_and(|overloads| !overloads.is_empty())
    }

    /// ABI-encode a call to `name` with the given arguments.
    ///
    /// Overloaded functions resolve to the first declaration, which is
    /// sufficient for the market and approval ABIs (no overloads).
    ///
    /// # Errors
    /// Returns an error if the function is missing from the ABI or the
    /// arguments don't match its inputs.
    pub fn encode_call(&self, name: &str, args: &[DynSolValue]) -> anyhow::Result<Vec<u8>> {
        let function = self
            .abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| anyhow::anyhow!("Function {name} not found in ABI for {}", self.address))?;

        function
            .abi_encode_input(args)
            .map_err(|e| anyhow::anyhow!("Failed to encode {name} call: {e}"))
    }
}

/// Trait for the game-client capabilities the panel depends on.
///
/// Balance updates are delivered as raw wei strings on a watch
/// channel; consumers re-read [`GameHost::native_balance`] instead of
/// parsing the notification, so one normalized code path produces
/// every displayed value.
#[async_trait]
pub trait GameHost: Send + Sync + 'static {
    /// The player's burner wallet address.
    fn player_address(&self) -> Address;

    /// Current native token balance in whole-token units.
    async fn native_balance(&self) -> anyhow::Result<f64>;

    /// Subscribe to balance change notifications (raw wei strings).
    fn balance_updates(&self) -> watch::Receiver<String>;

    /// Instantiate a contract handle after verifying code exists at
    /// the address.
    async fn load_contract(
        &self,
        address: Address,
        abi: JsonAbi,
    ) -> anyhow::Result<ContractHandle>;
}
