//! Artifact table.
//!
//! The shared table behind all three tabs: a sortable header, one
//! row per artifact with rarity-colored name and sign-colored stat
//! cells, and an optional action column. Sort state lives here and
//! resets when the tab unmounts.

use dioxus::prelude::*;
use tracing::debug;

use crate::domain::artifact::{format_multiplier, Artifact, Stat};
use crate::domain::listing::format_wei;
use crate::domain::sort::{sort_artifacts, SortKey, SortOrder};

use super::icons::StatIcon;
use super::theme;

/// The visual-only action a row offers.
///
/// Clicks log the intent; no transaction is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Buy,
    Sell,
}

impl RowAction {
    const fn label(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    const fn css_class(self) -> &'static str {
        match self {
            Self::Buy => "action-button buy",
            Self::Sell => "action-button sell",
        }
    }
}

/// A sortable artifact table, or an empty-state note.
#[component]
pub fn ArtifactTable(
    artifacts: Vec<Artifact>,
    empty: &'static str,
    action: Option<RowAction>,
) -> Element {
    let order = use_signal(SortOrder::unsorted);

    if artifacts.is_empty() {
        return rsx! {
            p { class: "empty-note", "{empty}" }
        };
    }

    let mut rows = artifacts;
    sort_artifacts(&mut rows, *order.read());

    rsx! {
        div { class: "artifact-table",
            TableHeader { order }
            for artifact in rows {
                ArtifactRow {
                    key: "{artifact.game_id}",
                    artifact,
                    action,
                }
            }
        }
    }
}

/// Header row with click-to-cycle sort buttons.
#[component]
fn TableHeader(mut order: Signal<SortOrder>) -> Element {
    let mut cycle = move |key: SortKey| {
        let next = order.read().cycled(key);
        order.set(next);
    };

    let kind_color = theme::sort_header_color(order.read().direction_of(SortKey::Kind));

    rsx! {
        div { class: "artifact-header",
            button {
                class: "header-button kind-header",
                style: "color: {kind_color}",
                onclick: move |_| cycle(SortKey::Kind),
                "Artifact"
            }
            for stat in Stat::ALL {
                button {
                    class: "header-button",
                    onclick: move |_| cycle(SortKey::Stat(stat)),
                    StatIcon {
                        stat,
                        color: theme::sort_header_color(
                            order.read().direction_of(SortKey::Stat(stat)),
                        ),
                    }
                }
            }
            div {}
        }
    }
}

/// One artifact row: name, five stat cells, price, action.
#[component]
fn ArtifactRow(artifact: Artifact, action: Option<RowAction>) -> Element {
    let name_color = theme::rarity_color(artifact.rarity);

    rsx! {
        div { class: "artifact-row",
            div {
                class: "kind-cell",
                style: "color: {name_color}",
                title: "{artifact.rarity} {artifact.kind}",
                "{artifact.kind}"
            }
            for stat in Stat::ALL {
                div {
                    class: "stat-cell",
                    style: "color: {theme::multiplier_color(artifact.multiplier(stat))}",
                    "{format_multiplier(artifact.multiplier(stat))}"
                }
            }
            div { class: "trade-cell",
                PriceCell { price: artifact.price.clone() }
                if let Some(action) = action {
                    ActionButton { token_id: artifact.token_id.clone(), action }
                }
            }
        }
    }
}

/// The asking price when known, otherwise a visual-only price input.
#[component]
fn PriceCell(price: Option<String>) -> Element {
    match price {
        Some(wei) => rsx! {
            span { class: "price-text", "{format_wei(&wei)}" }
        },
        None => rsx! {
            input {
                class: "price-input",
                r#type: "number",
                step: "0.01",
                min: "0.01",
            }
        },
    }
}

/// Buy/sell button. Submission is not implemented; a click only
/// records the intent.
#[component]
fn ActionButton(token_id: String, action: RowAction) -> Element {
    rsx! {
        button {
            class: action.css_class(),
            onclick: move |_| {
                debug!(token_id = %token_id, action = action.label(), "Trade action clicked");
            },
            "{action.label()}"
        }
    }
}
