//! Core artifact domain types.
//!
//! Defines the artifact entity as served by the game indexer: a token
//! identity, a rarity tier, a kind, and five combat stat multipliers.
//! Indexer enum values arrive as uppercase strings and parse with an
//! `Unknown` fallback so an unrecognized value can never poison a
//! whole page of results.

use serde::{Deserialize, Serialize};

/// Token identifier in decimal form, as used by both indexers.
///
/// The game indexer calls this `idDec`, the market indexer `tokenID`.
/// It is the join key between artifact metadata and listing state.
pub type TokenId = String;

/// Stat multiplier in percent, centered at 100 (= no modifier).
pub type Multiplier = i32;

/// Artifact rarity tier, ordered from least to most rare.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    Unknown,
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Parse an indexer rarity label (e.g. `"LEGENDARY"`).
    ///
    /// Unrecognized labels map to [`Rarity::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "COMMON" => Self::Common,
            "RARE" => Self::Rare,
            "EPIC" => Self::Epic,
            "LEGENDARY" => Self::Legendary,
            "MYTHIC" => Self::Mythic,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
        };
        write!(f, "{name}")
    }
}

/// Artifact kind as minted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Unknown,
    Monolith,
    Colossus,
    Spaceship,
    Pyramid,
    Wormhole,
    PlanetaryShield,
    PhotoidCannon,
    BloomFilter,
    BlackDomain,
}

impl ArtifactKind {
    /// Parse an indexer kind label (e.g. `"PLANETARYSHIELD"`).
    ///
    /// Unrecognized labels map to [`ArtifactKind::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "MONOLITH" => Self::Monolith,
            "COLOSSUS" => Self::Colossus,
            "SPACESHIP" => Self::Spaceship,
            "PYRAMID" => Self::Pyramid,
            "WORMHOLE" => Self::Wormhole,
            "PLANETARYSHIELD" => Self::PlanetaryShield,
            "PHOTOIDCANNON" => Self::PhotoidCannon,
            "BLOOMFILTER" => Self::BloomFilter,
            "BLACKDOMAIN" => Self::BlackDomain,
            _ => Self::Unknown,
        }
    }

    /// Human-readable name shown in the artifact table.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Monolith => "Monolith",
            Self::Colossus => "Colossus",
            Self::Spaceship => "Spaceship",
            Self::Pyramid => "Pyramid",
            Self::Wormhole => "Wormhole",
            Self::PlanetaryShield => "Planetary Shield",
            Self::PhotoidCannon => "Photoid Cannon",
            Self::BloomFilter => "Bloom Filter",
            Self::BlackDomain => "Black Domain",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The five combat stats an artifact modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    EnergyCap,
    EnergyGrowth,
    Range,
    Speed,
    Defense,
}

impl Stat {
    /// All stats in table column order.
    pub const ALL: [Self; 5] = [
        Self::EnergyCap,
        Self::EnergyGrowth,
        Self::Range,
        Self::Speed,
        Self::Defense,
    ];

    /// Column label used in accessibility text and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyCap => "Energy Cap",
            Self::EnergyGrowth => "Energy Growth",
            Self::Range => "Range",
            Self::Speed => "Speed",
            Self::Defense => "Defense",
        }
    }
}

/// Sign of a stat multiplier relative to the neutral 100% baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Neutral,
    Positive,
    Negative,
}

/// Classify a multiplier against the neutral baseline.
pub const fn multiplier_polarity(value: Multiplier) -> Polarity {
    if value == 100 {
        Polarity::Neutral
    } else if value > 100 {
        Polarity::Positive
    } else {
        Polarity::Negative
    }
}

/// Format a multiplier as a signed percentage delta.
///
/// `100` is the identity and renders as `+0%`; `115` renders as
/// `+15%`; `85` renders as `-15%`.
pub fn format_multiplier(value: Multiplier) -> String {
    if value == 100 {
        "+0%".to_string()
    } else if value > 100 {
        format!("+{}%", value - 100)
    } else {
        format!("-{}%", 100 - value)
    }
}

/// An artifact with its indexer-served metadata.
///
/// `price` is populated only for market-held artifacts listed for
/// sale by another player, after joining against listing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Decimal token ID (join key with listing state).
    pub token_id: TokenId,
    /// Hex game ID, used as the stable row key.
    pub game_id: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Artifact kind.
    pub kind: ArtifactKind,
    /// Energy cap multiplier.
    pub energy_cap: Multiplier,
    /// Energy growth multiplier.
    pub energy_growth: Multiplier,
    /// Range multiplier.
    pub range: Multiplier,
    /// Speed multiplier.
    pub speed: Multiplier,
    /// Defense multiplier.
    pub defense: Multiplier,
    /// Asking price in wei, when listed by another player.
    pub price: Option<String>,
}

impl Artifact {
    /// Look up a stat multiplier by column.
    pub const fn multiplier(&self, stat: Stat) -> Multiplier {
        match stat {
            Stat::EnergyCap => self.energy_cap,
            Stat::EnergyGrowth => self.energy_growth,
            Stat::Range => self.range,
            Stat::Speed => self.speed,
            Stat::Defense => self.defense,
        }
    }
}
