//! View Hooks - Live State for the Tabs
//!
//! Dioxus hooks binding the panel's services to the pure composition
//! functions. Each consuming view fetches fresh indexer data on
//! mount and drops it on unmount; only the contract registry
//! persists across remounts. In-flight fetches are not cancelled
//! when a view unmounts, so a slow query finishes quietly against a
//! dead scope.

use std::sync::Arc;

use dioxus::prelude::*;
use tracing::warn;

use crate::ports::abi_source::AbiSource;
use crate::ports::artifact_index::ArtifactIndex;
use crate::ports::game_host::GameHost;

use super::contracts::{ContractKey, ContractRegistry};
use super::inventory::{compose_inventory, InventoryView};
use super::market::{compose_market, MarketView};
use super::snapshot::Snapshot;
use super::wallet::WalletView;

/// The capabilities the hooks draw on, injected once at mount.
///
/// Explicit services instead of an ambient global: tests hand the
/// composition layer doubles, and the panel hands it live adapters.
#[derive(Clone)]
pub struct PanelServices {
    /// Player identity, balance and contract loading.
    pub host: Arc<dyn GameHost>,
    /// Artifact and listing reads.
    pub index: Arc<dyn ArtifactIndex>,
    /// Session-scoped contract cache.
    pub registry: Arc<ContractRegistry>,
    /// Display symbol for the chain's native token.
    pub native_symbol: String,
}

impl PanelServices {
    /// Assemble the service set the hooks consume.
    pub fn new(
        host: Arc<dyn GameHost>,
        index: Arc<dyn ArtifactIndex>,
        abis: Arc<dyn AbiSource>,
        artifacts: super::contracts::ContractSpec,
        market: super::contracts::ContractSpec,
        native_symbol: String,
    ) -> Self {
        let registry = Arc::new(ContractRegistry::new(
            Arc::clone(&host),
            abis,
            artifacts,
            market,
        ));

        Self {
            host,
            index,
            registry,
            native_symbol,
        }
    }
}

/// Load a contract handle as a resource.
fn use_contract(key: ContractKey) -> Snapshot<Arc<crate::ports::game_host::ContractHandle>> {
    let services = use_context::<PanelServices>();

    let handle = use_resource(move || {
        let registry = Arc::clone(&services.registry);
        async move { registry.get_or_load(key).await.map_err(Arc::new) }
    });

    Snapshot::from_poll(&handle.read())
}

/// Everything the Market and Listings tabs need.
///
/// Loading while the market contract or either indexer query is in
/// flight; the contract's error outranks the indexers'.
pub fn use_market() -> Snapshot<MarketView> {
    let services = use_context::<PanelServices>();
    let contract = use_contract(ContractKey::Market);

    let listings = use_resource({
        let services = services.clone();
        move || {
            let index = Arc::clone(&services.index);
            let player = services.host.player_address();
            async move { index.fetch_listings(player).await.map_err(Arc::new) }
        }
    });

    let artifacts = use_resource(move || {
        let index = Arc::clone(&services.index);
        let player = services.host.player_address();
        async move { index.fetch_artifacts(player).await.map_err(Arc::new) }
    });

    compose_market(
        contract,
        Snapshot::from_poll(&listings.read()),
        Snapshot::from_poll(&artifacts.read()),
    )
}

/// Everything the Inventory tab needs.
pub fn use_inventory() -> Snapshot<InventoryView> {
    let services = use_context::<PanelServices>();
    let contract = use_contract(ContractKey::Artifacts);

    let artifacts = use_resource(move || {
        let index = Arc::clone(&services.index);
        let player = services.host.player_address();
        async move { index.fetch_artifacts(player).await.map_err(Arc::new) }
    });

    compose_inventory(contract, Snapshot::from_poll(&artifacts.read()))
}

/// The player's native balance for the tab bar.
///
/// The host's notification stream carries raw wei strings; every
/// notification triggers a re-read of the normalized getter instead
/// of trusting the payload. A failed re-read logs and keeps the last
/// known value on screen.
pub fn use_wallet() -> WalletView {
    let services = use_context::<PanelServices>();
    let mut balance = use_signal(|| None::<f64>);

    let _refresher = use_resource(move || {
        let host = Arc::clone(&services.host);
        async move {
            match host.native_balance().await {
                Ok(value) => balance.set(Some(value)),
                Err(error) => warn!(error = %error, "Initial balance read failed"),
            }

            let mut updates = host.balance_updates();
            while updates.changed().await.is_ok() {
                match host.native_balance().await {
                    Ok(value) => balance.set(Some(value)),
                    Err(error) => warn!(error = %error, "Balance refresh failed"),
                }
            }
        }
    });

    WalletView::from_balance(*balance.read())
}
