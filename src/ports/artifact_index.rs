//! Artifact Index Port - Indexer Query Interface
//!
//! Defines the trait for reading artifact and listing state from the
//! indexers. The live adapter speaks GraphQL to two subgraphs (game
//! and market); tests substitute canned snapshots.

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::domain::artifact::{Artifact, TokenId};
use crate::domain::listing::Listing;

/// Artifact metadata grouped by holder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactsSnapshot {
    /// Artifacts in the player's wallet.
    pub owned: Vec<Artifact>,
    /// Artifacts escrowed in the market contract.
    pub market_held: Vec<Artifact>,
}

/// Listing state grouped by lister.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingsSnapshot {
    /// Token IDs the player has listed.
    pub mine: Vec<TokenId>,
    /// Tokens other players have listed, with asking prices.
    pub others: Vec<Listing>,
}

/// Trait for indexer reads.
///
/// Both fetches walk indexer pagination to completion, so a snapshot
/// is the whole collection, not the first page.
#[async_trait]
pub trait ArtifactIndex: Send + Sync + 'static {
    /// Fetch artifact metadata for the player and the market escrow.
    async fn fetch_artifacts(&self, player: Address) -> anyhow::Result<ArtifactsSnapshot>;

    /// Fetch listing state relative to the player.
    async fn fetch_listings(&self, player: Address) -> anyhow::Result<ListingsSnapshot>;
}
