//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP clients, blockchain RPC). Each
//! sub-module groups adapters by infrastructure concern.
//!
//! Adapter categories:
//! - `chain`: xDai blockchain interaction via alloy-rs
//! - `graph`: Subgraph indexer reads over GraphQL

pub mod chain;
pub mod graph;
