//! Domain layer - Core marketplace logic and models.
//!
//! This module contains the pure domain logic for the artifact
//! market panel. No external dependencies allowed here (hexagonal
//! architecture inner ring). All types are serializable and
//! testable in isolation.

pub mod artifact;
pub mod listing;
pub mod sort;

// Re-export core types for convenience
pub use artifact::{
    Artifact, ArtifactKind, format_multiplier, Multiplier, multiplier_polarity, Polarity,
    Rarity, Stat, TokenId,
};
pub use listing::{
    format_wei, Listing, ListingBook, MarketPartition, partition_market, wei_to_native,
};
pub use sort::{sort_artifacts, SortDir, SortKey, SortOrder};
