//! Artifact Market Panel - Library Root
//!
//! Re-exports all modules for integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod panel;
pub mod ports;
pub mod state;
pub mod ui;
