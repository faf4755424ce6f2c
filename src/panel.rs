//! Host-facing panel lifecycle.
//!
//! Mounts the UI into a fixed-size desktop window and tears it down
//! when the window closes. The game client's plugin surface gives a
//! panel a 512x384 container; the standalone window keeps the same
//! footprint and disallows resizing.

use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;

use crate::state::hooks::PanelServices;
use crate::ui::App;

/// Container size the game client allots to the panel.
pub const PANEL_WIDTH: f64 = 512.0;
/// Container height, matching the plugin surface.
pub const PANEL_HEIGHT: f64 = 384.0;

/// Styles embedded at compile time.
const PANEL_CSS: &str = include_str!("../assets/panel.css");

/// Services handed to the component tree.
///
/// The desktop launcher takes over the main thread before any
/// component runs, so the wiring stashes the services here and the
/// root component picks them up on first render.
static SERVICES: OnceLock<PanelServices> = OnceLock::new();

/// Services for the mounted panel, if wiring completed.
pub(crate) fn services() -> Option<PanelServices> {
    SERVICES.get().cloned()
}

/// The marketplace panel: mount with [`MarketPanel::run`], unmount
/// by closing the window.
pub struct MarketPanel {
    title: String,
    services: PanelServices,
}

impl MarketPanel {
    /// Prepare a panel around the wired services.
    pub const fn new(title: String, services: PanelServices) -> Self {
        Self { title, services }
    }

    /// Open the panel window and block until it closes.
    ///
    /// # Errors
    /// Returns an error if a panel was already mounted in this
    /// process; the services slot is written exactly once.
    pub fn run(self) -> Result<()> {
        SERVICES
            .set(self.services)
            .map_err(|_| anyhow!("Market panel was already mounted in this process"))?;

        info!(title = %self.title, "Mounting market panel");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(PANEL_WIDTH, PANEL_HEIGHT))
            .with_resizable(false);

        dioxus::LaunchBuilder::desktop()
            .with_cfg(
                Config::new()
                    .with_window(window)
                    .with_custom_head(format!("<style>{PANEL_CSS}</style>")),
            )
            .launch(App);

        Ok(())
    }
}
