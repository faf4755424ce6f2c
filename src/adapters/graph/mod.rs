//! Graph Adapters - Indexer Access
//!
//! GraphQL clients for the game and market subgraphs.

pub mod client;
pub mod queries;
pub mod types;

pub use client::GraphClient;
pub use types::GraphError;
