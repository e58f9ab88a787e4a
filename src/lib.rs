//! Token Balance Server Library
//!
//! An HTTP service answering "what is the balance of ERC20 token T held by
//! wallet W" against a live Ethereum node.
//!
//! # Features
//!
//! - **Balance Queries**: Raw and scaled ERC20 balances with token metadata
//! - **Name Lookups**: Resolve ticker symbols and exchange names to addresses
//! - **Health**: Node liveness and network id
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_balance_server::{
//!     api, config::DEFAULT_REQUEST_TIMEOUT, services::{BalanceService, NameResolver},
//!     EthereumClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(EthereumClient::new("http://localhost:8545")?);
//!     let balances = BalanceService::new(client, Arc::new(NameResolver::builtin()));
//!     let app = api::router(api::AppState::new(balances), DEFAULT_REQUEST_TIMEOUT);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ethereum;
pub mod presenter;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, ErrorKind, Result};
pub use ethereum::{ChainClient, EthereumClient};
