//! Ethereum interaction module.
//!
//! Contains the chain access trait, the RPC client and contract bindings.

pub mod chain;
pub mod client;
pub mod constants;
pub mod contracts;

pub use chain::ChainClient;
pub use client::{EthereumClient, HttpProvider};
