//! State Layer - View Composition
//!
//! Turns port data into the three view models the tabs render. Pure
//! composition functions live beside the Dioxus hooks that drive
//! them, so every merge rule tests without a UI runtime.
//!
//! State categories:
//! - `snapshot`: The data/loading/error triple and its merge rules
//! - `contracts`: Session-scoped contract handle cache
//! - `market` / `inventory` / `wallet`: Per-tab view models
//! - `hooks`: Dioxus hooks binding live services to the views

pub mod contracts;
pub mod hooks;
pub mod inventory;
pub mod market;
pub mod snapshot;
pub mod wallet;

pub use contracts::{ContractKey, ContractRegistry, ContractSpec};
pub use hooks::{use_inventory, use_market, use_wallet, PanelServices};
pub use inventory::{compose_inventory, InventoryView};
pub use market::{compose_market, MarketView};
pub use snapshot::{Snapshot, StateError};
pub use wallet::{format_balance, WalletView};
