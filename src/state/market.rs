//! Market State - For-sale and Listed Composition
//!
//! Composes the market tab's view from three dependencies: the
//! market contract handle, listing state, and artifact metadata.
//! The composition itself is pure so the merge rules test without a
//! UI runtime; the hook layer feeds it live snapshots.

use std::sync::Arc;

use crate::domain::artifact::Artifact;
use crate::domain::listing::{partition_market, ListingBook};
use crate::ports::artifact_index::{ArtifactsSnapshot, ListingsSnapshot};
use crate::ports::game_host::ContractHandle;

use super::snapshot::Snapshot;

/// Everything the Market and Listings tabs render.
#[derive(Debug, Clone)]
pub struct MarketView {
    /// Artifacts other players listed, with prices, ready to buy.
    pub for_sale: Vec<Artifact>,
    /// Artifacts the current player has listed.
    pub listed: Vec<Artifact>,
    /// The market contract, for encoding buy/unlist calls.
    pub contract: Arc<ContractHandle>,
}

/// Compose the market view from its dependency snapshots.
///
/// Error priority follows argument order: a contract failure
/// outranks a listings failure, which outranks an artifacts failure.
pub fn compose_market(
    contract: Snapshot<Arc<ContractHandle>>,
    listings: Snapshot<ListingsSnapshot>,
    artifacts: Snapshot<ArtifactsSnapshot>,
) -> Snapshot<MarketView> {
    let escrow = listings.join(artifacts, |listings, artifacts| {
        let book = ListingBook::new(listings.mine, listings.others);
        partition_market(artifacts.market_held, &book)
    });

    contract.join(escrow, |contract, partition| MarketView {
        for_sale: partition.for_sale,
        listed: partition.listed,
        contract,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifact::{ArtifactKind, Rarity};
    use crate::domain::listing::Listing;
    use alloy::json_abi::JsonAbi;
    use alloy::primitives::Address;

    fn handle() -> Arc<ContractHandle> {
        Arc::new(ContractHandle::new(Address::ZERO, JsonAbi::new()))
    }

    fn artifact(token_id: &str) -> Artifact {
        Artifact {
            token_id: token_id.to_string(),
            game_id: format!("0x{token_id}"),
            rarity: Rarity::Rare,
            kind: ArtifactKind::Wormhole,
            energy_cap: 100,
            energy_growth: 100,
            range: 100,
            speed: 100,
            defense: 100,
            price: None,
        }
    }

    #[test]
    fn test_compose_partitions_escrow() {
        let listings = ListingsSnapshot {
            mine: vec!["2".to_string()],
            others: vec![Listing {
                token_id: "1".to_string(),
                price: "1000000000000000000".to_string(),
            }],
        };
        let artifacts = ArtifactsSnapshot {
            owned: vec![],
            market_held: vec![artifact("1"), artifact("2")],
        };

        let view = compose_market(
            Snapshot::ready(handle()),
            Snapshot::ready(listings),
            Snapshot::ready(artifacts),
        );

        let view = view.data.unwrap();
        assert_eq!(view.for_sale.len(), 1);
        assert_eq!(view.for_sale[0].price.as_deref(), Some("1000000000000000000"));
        assert_eq!(view.listed.len(), 1);
        assert_eq!(view.listed[0].token_id, "2");
    }

    #[test]
    fn test_compose_loading_while_any_dependency_pends() {
        let view = compose_market(
            Snapshot::ready(handle()),
            Snapshot::loading(),
            Snapshot::ready(ArtifactsSnapshot::default()),
        );

        assert!(view.loading);
        assert!(view.data.is_none());
    }

    #[test]
    fn test_compose_contract_error_outranks_graph_error() {
        let contract_err = Arc::new(anyhow::anyhow!("Failed to load market-contract"));
        let graph_err = Arc::new(anyhow::anyhow!("graph query rejected: boom"));

        let view = compose_market(
            Snapshot::failed(contract_err),
            Snapshot::failed(graph_err),
            Snapshot::ready(ArtifactsSnapshot::default()),
        );

        assert_eq!(
            view.error_text().as_deref(),
            Some("Failed to load market-contract")
        );
    }
}
