//! Chain Adapters - xDai Blockchain Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with startup chain-ID validation
//! - Player wallet balance reads and change notifications
//! - Contract loading (ABI fetch + on-chain code check)

pub mod abi;
pub mod host;
pub mod provider;

pub use abi::HttpAbiSource;
pub use host::RpcGameHost;
pub use provider::XdaiProvider;
