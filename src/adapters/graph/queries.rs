//! Subgraph Query Builders
//!
//! Builds the GraphQL documents sent to the two indexers. Addresses
//! interpolate as lowercase hex because The Graph stores them that
//! way and the filters are exact string matches; a checksummed
//! address silently matches nothing.
//!
//! Every query carries explicit `first`/`skip` so callers page
//! through collections instead of silently truncating at the
//! indexer's default page size.

use alloy::primitives::Address;

/// Artifact fields requested from the game indexer.
const ARTIFACT_FIELDS: &str = "\
idDec
id
rarity
artifactType
energyCapMultiplier
energyGrowthMultiplier
rangeMultiplier
speedMultiplier
defenseMultiplier";

/// One page of artifacts held by `owner`.
pub fn artifacts_by_owner(owner: Address, first: usize, skip: usize) -> String {
    format!(
        r#"query ArtifactsByOwner {{
    artifacts(where: {{owner: "{owner:#x}"}}, first: {first}, skip: {skip}) {{
        {ARTIFACT_FIELDS}
    }}
}}"#
    )
}

/// One page of tokens listed by players other than `player`,
/// with asking prices.
pub fn listings_by_others(player: Address, first: usize, skip: usize) -> String {
    format!(
        r#"query ListingsByOthers {{
    listedTokens(where: {{owner_not: "{player:#x}"}}, first: {first}, skip: {skip}) {{
        tokenID
        price
    }}
}}"#
    )
}

/// One page of tokens listed by `player` (IDs only; the market
/// indexer does not expose your own asking price on this path).
pub fn listings_by_player(player: Address, first: usize, skip: usize) -> String {
    format!(
        r#"query ListingsByPlayer {{
    listedTokens(where: {{owner: "{player:#x}"}}, first: {first}, skip: {skip}) {{
        tokenID
    }}
}}"#
    )
}
