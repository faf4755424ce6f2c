//! Panel root and tab views.
//!
//! Three tabs over the composed state, a bottom tab bar with the
//! balance readout, and the shared loading/error presentation. Each
//! tab renders exactly one of: loading indicator, error block,
//! artifact table.

use dioxus::prelude::*;
use tracing::info;

use crate::state::hooks::{use_inventory, use_market, use_wallet, PanelServices};

use super::artifacts::{ArtifactTable, RowAction};

/// The panel's three tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Market,
    Listings,
    Inventory,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Market, Self::Listings, Self::Inventory];

    const fn label(self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Listings => "Listings",
            Self::Inventory => "Inventory",
        }
    }
}

/// Root component. Injects the panel services into context and
/// switches tab content.
#[component]
pub fn App() -> Element {
    let Some(services) = crate::panel::services() else {
        return rsx! {
            div { class: "error-view",
                h1 { "Something went wrong..." }
                p { "Panel services were not initialized before launch." }
            }
        };
    };
    use_context_provider(|| services);

    let mut active = use_signal(|| Tab::Market);

    use_drop(|| {
        info!("Market panel unmounted");
    });

    let current = *active.read();

    rsx! {
        div { class: "panel-root",
            div { class: "tab-content",
                match current {
                    Tab::Market => rsx! { MarketTab {} },
                    Tab::Listings => rsx! { ListingsTab {} },
                    Tab::Inventory => rsx! { InventoryTab {} },
                }
            }
            div { class: "tab-bar",
                for tab in Tab::ALL {
                    button {
                        class: if current == tab { "tab-button active" } else { "tab-button" },
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
                BalanceReadout {}
            }
        }
    }
}

/// Native balance, right-aligned in the tab bar.
#[component]
fn BalanceReadout() -> Element {
    let services = use_context::<PanelServices>();
    let wallet = use_wallet();

    rsx! {
        span { class: "balance", "{wallet.display} {services.native_symbol}" }
    }
}

/// Artifacts other players have listed, ready to buy.
#[component]
fn MarketTab() -> Element {
    let market = use_market();

    rsx! {
        TabPane {
            loading: market.loading,
            error: market.error_text(),
            if let Some(view) = market.data {
                ArtifactTable {
                    artifacts: view.for_sale,
                    empty: "There aren't currently any artifacts listed for sale.",
                    action: Some(RowAction::Buy),
                }
            }
        }
    }
}

/// The player's own listings.
#[component]
fn ListingsTab() -> Element {
    let market = use_market();

    rsx! {
        TabPane {
            loading: market.loading,
            error: market.error_text(),
            if let Some(view) = market.data {
                ArtifactTable {
                    artifacts: view.listed,
                    empty: "You don't currently have any artifacts listed.",
                    action: None,
                }
            }
        }
    }
}

/// The player's wallet artifacts.
#[component]
fn InventoryTab() -> Element {
    let inventory = use_inventory();

    rsx! {
        TabPane {
            loading: inventory.loading,
            error: inventory.error_text(),
            if let Some(view) = inventory.data {
                ArtifactTable {
                    artifacts: view.owned,
                    empty: "You don't currently have any artifacts.",
                    action: Some(RowAction::Sell),
                }
            }
        }
    }
}

/// Shared loading/error/content switch for a tab.
///
/// Loading outranks error: an error shows only once every dependency
/// has settled, matching the snapshot merge rules.
#[component]
fn TabPane(
    loading: bool,
    error: Option<String>,
    children: Element,
) -> Element {
    if loading {
        return rsx! { Loading {} };
    }

    if let Some(message) = error {
        return rsx! {
            div { class: "error-view",
                h1 { "Something went wrong..." }
                p { "{message}" }
            }
        };
    }

    rsx! {
        div { class: "tab-pane", {children} }
    }
}

/// Crawling-dot loading indicator.
#[component]
fn Loading() -> Element {
    let mut dots = use_signal(String::new);

    let _ticker = use_resource(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_millis(150)).await;
            let mut text = dots.write();
            if text.len() >= 20 {
                text.clear();
            } else {
                text.push_str(". ");
            }
        }
    });

    rsx! {
        div { class: "loading", "{dots}" }
    }
}
