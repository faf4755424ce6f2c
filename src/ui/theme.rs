//! Panel color scheme.
//!
//! The fixed palette of the game client's UI, so the panel blends in
//! with the surrounding chrome. Rarity tiers and multiplier signs
//! map to colors here and nowhere else.

use crate::domain::artifact::{multiplier_polarity, Multiplier, Polarity, Rarity};
use crate::domain::sort::SortDir;

/// Raw palette values.
pub mod palette {
    pub const MUTED: &str = "#838383";
    pub const GRAY: &str = "#aaaaaa";
    pub const BACKGROUND: &str = "#151515";
    pub const BACKGROUND_DARK: &str = "#252525";
    pub const BORDER_LIGHT: &str = "#5f5f5f";
    pub const GREEN: &str = "#00DC82";
    pub const RED: &str = "#FF6492";
    pub const YELLOW: &str = "#e8e228";
    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#000000";
    pub const RARE: &str = "#6b68ff";
    pub const EPIC: &str = "#c13cff";
    pub const LEGENDARY: &str = "#f8b73e";
    pub const MYTHIC: &str = "#ff44b7";
}

/// Display color for a rarity tier.
///
/// Total over the enum: an unknown tier gets the designated unknown
/// color rather than falling through.
pub const fn rarity_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Unknown => palette::BLACK,
        Rarity::Common => palette::MUTED,
        Rarity::Rare => palette::RARE,
        Rarity::Epic => palette::EPIC,
        Rarity::Legendary => palette::LEGENDARY,
        Rarity::Mythic => palette::MYTHIC,
    }
}

/// Display color for a multiplier sign.
pub const fn polarity_color(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Neutral => palette::MUTED,
        Polarity::Positive => palette::GREEN,
        Polarity::Negative => palette::RED,
    }
}

/// Display color for a multiplier value.
pub const fn multiplier_color(value: Multiplier) -> &'static str {
    polarity_color(multiplier_polarity(value))
}

/// Tint for a column header: green while sorting forward, red while
/// reversed, muted when the column is inactive.
pub const fn sort_header_color(direction: Option<SortDir>) -> &'static str {
    match direction {
        Some(SortDir::Forward) => palette::GREEN,
        Some(SortDir::Reverse) => palette::RED,
        None => palette::MUTED,
    }
}
