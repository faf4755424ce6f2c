//! Inventory State - Owned Artifact Composition
//!
//! Composes the inventory tab's view: the player's own artifacts
//! plus the artifacts contract (whose approval call a future sell
//! flow encodes against).

use std::sync::Arc;

use crate::domain::artifact::Artifact;
use crate::ports::artifact_index::ArtifactsSnapshot;
use crate::ports::game_host::ContractHandle;

use super::snapshot::Snapshot;

/// Everything the Inventory tab renders.
#[derive(Debug, Clone)]
pub struct InventoryView {
    /// Artifacts in the player's wallet.
    pub owned: Vec<Artifact>,
    /// The artifacts contract, for encoding approval calls.
    pub contract: Arc<ContractHandle>,
}

/// Compose the inventory view from its dependency snapshots.
///
/// A contract failure outranks an artifacts failure.
pub fn compose_inventory(
    contract: Snapshot<Arc<ContractHandle>>,
    artifacts: Snapshot<ArtifactsSnapshot>,
) -> Snapshot<InventoryView> {
    contract.join(artifacts, |contract, artifacts| InventoryView {
        owned: artifacts.owned,
        contract,
    })
}
