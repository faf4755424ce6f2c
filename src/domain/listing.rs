//! Listing state and market partition logic.
//!
//! The market indexer tells us which tokens sit in the market
//! contract's escrow: tokens listed by the current player (no price
//! exposed) and tokens listed by everyone else (with an asking
//! price). Joining that against the game indexer's view of
//! market-held artifacts splits the escrow into "for sale to me"
//! and "listed by me". The join is strictly by token ID; the two
//! indexers return collections in unrelated orders.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::artifact::{Artifact, TokenId};

/// Number of wei in one native token.
const WEI_PER_NATIVE: f64 = 1e18;

/// A token listed for sale by another player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Decimal token ID.
    pub token_id: TokenId,
    /// Asking price in wei.
    pub price: String,
}

/// Listing state for the market contract, keyed by token ID.
#[derive(Debug, Clone, Default)]
pub struct ListingBook {
    mine: HashSet<TokenId>,
    prices: HashMap<TokenId, String>,
}

impl ListingBook {
    /// Build a book from the two market indexer collections.
    pub fn new(
        mine: impl IntoIterator<Item = TokenId>,
        others: impl IntoIterator<Item = Listing>,
    ) -> Self {
        Self {
            mine: mine.into_iter().collect(),
            prices: others
                .into_iter()
                .map(|listing| (listing.token_id, listing.price))
                .collect(),
        }
    }

    /// Whether the current player listed this token.
    pub fn is_mine(&self, token_id: &str) -> bool {
        self.mine.contains(token_id)
    }

    /// Asking price in wei for a token listed by another player.
    pub fn price_of(&self, token_id: &str) -> Option<&str> {
        self.prices.get(token_id).map(String::as_str)
    }

    /// Number of tokens the player has listed.
    pub fn mine_count(&self) -> usize {
        self.mine.len()
    }

    /// Number of tokens others have listed.
    pub fn others_count(&self) -> usize {
        self.prices.len()
    }
}

/// Market escrow split into the two tabs it feeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketPartition {
    /// Artifacts listed by other players, with prices attached.
    pub for_sale: Vec<Artifact>,
    /// Artifacts the current player has listed.
    pub listed: Vec<Artifact>,
}

/// Partition market-held artifacts by listing ownership.
///
/// Every artifact the game indexer attributes to the market contract
/// lands in exactly one bucket: `listed` if the player listed it,
/// otherwise `for_sale` with the asking price attached when the
/// market indexer knows one. A missing price (indexer lag) leaves
/// `price` as `None` rather than dropping the row.
pub fn partition_market(market_held: Vec<Artifact>, book: &ListingBook) -> MarketPartition {
    let mut partition = MarketPartition::default();

    for mut artifact in market_held {
        if book.is_mine(&artifact.token_id) {
            partition.listed.push(artifact);
        } else {
            artifact.price = book.price_of(&artifact.token_id).map(str::to_string);
            partition.for_sale.push(artifact);
        }
    }

    partition
}

/// Convert a wei amount string to native token units.
///
/// Returns `None` for amounts that are not decimal integers or that
/// exceed `u128` (no realistic price does).
pub fn wei_to_native(wei: &str) -> Option<f64> {
    let wei: u128 = wei.parse().ok()?;

    #[allow(clippy::cast_precision_loss)]
    Some(wei as f64 / WEI_PER_NATIVE)
}

/// Format a wei amount for display, two decimal places.
///
/// Unparseable amounts render as `"?"` so a malformed listing is
/// visible instead of silently hidden.
pub fn format_wei(wei: &str) -> String {
    wei_to_native(wei).map_or_else(|| "?".to_string(), |native| format!("{native:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifact::{ArtifactKind, Rarity};

    fn artifact(token_id: &str) -> Artifact {
        Artifact {
            token_id: token_id.to_string(),
            game_id: format!("0x{token_id}"),
            rarity: Rarity::Common,
            kind: ArtifactKind::Monolith,
            energy_cap: 100,
            energy_growth: 100,
            range: 100,
            speed: 100,
            defense: 100,
            price: None,
        }
    }

    fn listing(token_id: &str, price: &str) -> Listing {
        Listing {
            token_id: token_id.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_partition_splits_by_listing_owner() {
        let book = ListingBook::new(
            vec!["2".to_string(), "4".to_string()],
            vec![
                listing("1", "1000000000000000000"),
                listing("3", "2500000000000000000"),
                listing("5", "500000000000000000"),
            ],
        );
        let held = vec![
            artifact("1"),
            artifact("2"),
            artifact("3"),
            artifact("4"),
            artifact("5"),
        ];

        let partition = partition_market(held, &book);

        assert_eq!(partition.for_sale.len(), 3);
        assert_eq!(partition.listed.len(), 2);
    }

    #[test]
    fn test_partition_prices_join_by_token_id_not_position() {
        // Listings arrive in an order unrelated to the artifacts
        let book = ListingBook::new(
            vec![],
            vec![
                listing("9", "9000000000000000000"),
                listing("7", "7000000000000000000"),
            ],
        );
        let held = vec![artifact("7"), artifact("9")];

        let partition = partition_market(held, &book);

        assert_eq!(
            partition.for_sale[0].price.as_deref(),
            Some("7000000000000000000")
        );
        assert_eq!(
            partition.for_sale[1].price.as_deref(),
            Some("9000000000000000000")
        );
    }

    #[test]
    fn test_partition_keeps_unpriced_artifacts() {
        let book = ListingBook::new(vec![], vec![]);
        let partition = partition_market(vec![artifact("1")], &book);

        assert_eq!(partition.for_sale.len(), 1);
        assert_eq!(partition.for_sale[0].price, None);
    }

    #[test]
    fn test_book_ignores_listings_without_artifacts() {
        // A listing for a token the game indexer hasn't served yet
        // simply never joins; it must not invent a row.
        let book = ListingBook::new(vec![], vec![listing("99", "1")]);
        let partition = partition_market(vec![artifact("1")], &book);

        assert_eq!(partition.for_sale.len(), 1);
        assert_eq!(partition.for_sale[0].token_id, "1");
    }

    #[test]
    fn test_wei_to_native() {
        assert_eq!(wei_to_native("1000000000000000000"), Some(1.0));
        assert_eq!(wei_to_native("1500000000000000000"), Some(1.5));
        assert_eq!(wei_to_native("0"), Some(0.0));
        assert_eq!(wei_to_native("xyz"), None);
        assert_eq!(wei_to_native(""), None);
    }

    #[test]
    fn test_format_wei() {
        assert_eq!(format_wei("1000000000000000000"), "1.00");
        assert_eq!(format_wei("12500000000000000000"), "12.50");
        assert_eq!(format_wei("garbage"), "?");
    }
}
