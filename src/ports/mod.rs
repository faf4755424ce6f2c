//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the domain/state layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `GameHost`: Player wallet, balance stream, contract loading
//! - `ArtifactIndex`: Artifact and listing reads from the indexers
//! - `AbiSource`: Contract ABI retrieval

pub mod abi_source;
pub mod artifact_index;
pub mod game_host;
