//! Artifact table sorting.
//!
//! Each sortable column cycles through three states on click:
//! forward, reverse, then back to the default order. The default
//! order is rarity descending. "Forward" means the direction a
//! player reaches for first: highest stat on top for numeric
//! columns, alphabetical for the kind column. All sorts are stable,
//! so ties keep their indexer order.

use serde::{Deserialize, Serialize};

use super::artifact::{Artifact, Stat};

/// A sortable column of the artifact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Artifact kind, alphabetical by display name.
    Kind,
    /// One of the five stat multiplier columns.
    Stat(Stat),
}

/// Direction within a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    Forward,
    Reverse,
}

/// Current sort state of an artifact table.
///
/// `None` inside means the default order (rarity descending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder(Option<(SortKey, SortDir)>);

impl SortOrder {
    /// The default rarity-descending order.
    pub const fn unsorted() -> Self {
        Self(None)
    }

    /// Sort state after clicking `key`'s column header.
    ///
    /// Clicking an inactive column sorts it forward; clicking again
    /// reverses; a third click returns to the default order.
    /// Clicking a different column always starts that column forward.
    #[must_use]
    pub fn cycled(self, key: SortKey) -> Self {
        match self.0 {
            Some((active, SortDir::Forward)) if active == key => {
                Self(Some((key, SortDir::Reverse)))
            }
            Some((active, SortDir::Reverse)) if active == key => Self(None),
            _ => Self(Some((key, SortDir::Forward))),
        }
    }

    /// Direction of `key` if it is the active sort column.
    pub fn direction_of(self, key: SortKey) -> Option<SortDir> {
        match self.0 {
            Some((active, dir)) if active == key => Some(dir),
            _ => None,
        }
    }
}

/// Sort artifacts in place according to `order`.
pub fn sort_artifacts(artifacts: &mut [Artifact], order: SortOrder) {
    match order.0 {
        None => artifacts.sort_by(|a, b| b.rarity.cmp(&a.rarity)),
        Some((SortKey::Kind, dir)) => artifacts.sort_by(|a, b| {
            let ordering = a.kind.display_name().cmp(b.kind.display_name());
            match dir {
                SortDir::Forward => ordering,
                SortDir::Reverse => ordering.reverse(),
            }
        }),
        Some((SortKey::Stat(stat), dir)) => artifacts.sort_by(|a, b| {
            // Forward puts the strongest multiplier on top
            let ordering = b.multiplier(stat).cmp(&a.multiplier(stat));
            match dir {
                SortDir::Forward => ordering,
                SortDir::Reverse => ordering.reverse(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifact::{ArtifactKind, Rarity};

    fn artifact(token_id: &str, rarity: Rarity, kind: ArtifactKind, speed: i32) -> Artifact {
        Artifact {
            token_id: token_id.to_string(),
            game_id: format!("0x{token_id}"),
            rarity,
            kind,
            energy_cap: 100,
            energy_growth: 100,
            range: 100,
            speed,
            defense: 100,
            price: None,
        }
    }

    #[test]
    fn test_cycle_forward_reverse_unsorted() {
        let key = SortKey::Stat(Stat::Speed);
        let order = SortOrder::unsorted();

        let order = order.cycled(key);
        assert_eq!(order.direction_of(key), Some(SortDir::Forward));

        let order = order.cycled(key);
        assert_eq!(order.direction_of(key), Some(SortDir::Reverse));

        let order = order.cycled(key);
        assert_eq!(order, SortOrder::unsorted());
    }

    #[test]
    fn test_cycle_switching_column_starts_forward() {
        let order = SortOrder::unsorted()
            .cycled(SortKey::Stat(Stat::Speed))
            .cycled(SortKey::Kind);

        assert_eq!(order.direction_of(SortKey::Kind), Some(SortDir::Forward));
        assert_eq!(order.direction_of(SortKey::Stat(Stat::Speed)), None);
    }

    #[test]
    fn test_default_sort_rarity_descending() {
        let mut artifacts = vec![
            artifact("1", Rarity::Common, ArtifactKind::Monolith, 100),
            artifact("2", Rarity::Mythic, ArtifactKind::Monolith, 100),
            artifact("3", Rarity::Rare, ArtifactKind::Monolith, 100),
        ];

        sort_artifacts(&mut artifacts, SortOrder::unsorted());

        let rarities: Vec<_> = artifacts.iter().map(|a| a.rarity).collect();
        assert_eq!(rarities, vec![Rarity::Mythic, Rarity::Rare, Rarity::Common]);
    }

    #[test]
    fn test_default_sort_is_stable_for_ties() {
        let mut artifacts = vec![
            artifact("a", Rarity::Epic, ArtifactKind::Monolith, 100),
            artifact("b", Rarity::Epic, ArtifactKind::Wormhole, 100),
            artifact("c", Rarity::Epic, ArtifactKind::Pyramid, 100),
        ];

        sort_artifacts(&mut artifacts, SortOrder::unsorted());

        let ids: Vec<_> = artifacts.iter().map(|a| a.token_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stat_forward_is_descending() {
        let mut artifacts = vec![
            artifact("1", Rarity::Common, ArtifactKind::Monolith, 80),
            artifact("2", Rarity::Common, ArtifactKind::Monolith, 120),
            artifact("3", Rarity::Common, ArtifactKind::Monolith, 100),
        ];

        let order = SortOrder::unsorted().cycled(SortKey::Stat(Stat::Speed));
        sort_artifacts(&mut artifacts, order);

        let speeds: Vec<_> = artifacts.iter().map(|a| a.speed).collect();
        assert_eq!(speeds, vec![120, 100, 80]);
    }

    #[test]
    fn test_stat_reverse_is_ascending() {
        let mut artifacts = vec![
            artifact("1", Rarity::Common, ArtifactKind::Monolith, 80),
            artifact("2", Rarity::Common, ArtifactKind::Monolith, 120),
        ];

        let order = SortOrder::unsorted()
            .cycled(SortKey::Stat(Stat::Speed))
            .cycled(SortKey::Stat(Stat::Speed));
        sort_artifacts(&mut artifacts, order);

        let speeds: Vec<_> = artifacts.iter().map(|a| a.speed).collect();
        assert_eq!(speeds, vec![80, 120]);
    }

    #[test]
    fn test_kind_forward_is_alphabetical() {
        let mut artifacts = vec![
            artifact("1", Rarity::Common, ArtifactKind::Wormhole, 100),
            artifact("2", Rarity::Common, ArtifactKind::BlackDomain, 100),
            artifact("3", Rarity::Common, ArtifactKind::Monolith, 100),
        ];

        let order = SortOrder::unsorted().cycled(SortKey::Kind);
        sort_artifacts(&mut artifacts, order);

        let kinds: Vec<_> = artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::BlackDomain,
                ArtifactKind::Monolith,
                ArtifactKind::Wormhole
            ]
        );
    }
}
