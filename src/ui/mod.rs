//! Presentation Layer - Dioxus Components
//!
//! Stateless view components over the composed state. Business logic
//! stays in `domain` and `state`; the only logic here is display
//! order (sort cycling) and color selection.

pub mod app;
pub mod artifacts;
pub mod icons;
pub mod theme;

pub use app::App;
