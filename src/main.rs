//! Token Balance Server
//!
//! HTTP server answering ERC20 token balance queries.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use token_balance_server::{
    api::{self, AppState},
    services::{BalanceService, NameResolver},
    Config, EthereumClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("Starting Token Balance Server");

    // Initialize Ethereum client (lazy - no network call yet)
    let client = Arc::new(EthereumClient::new(&config.rpc_url)?);

    let names = Arc::new(NameResolver::load(&config.name_tables).await?);

    let state = AppState::new(BalanceService::new(client, names));
    let app = api::router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Token Balance Server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Token Balance Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
