//! Ethereum RPC client.

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
};
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    ethereum::{chain::ChainClient, contracts::erc20::IERC20},
};

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created (lazy initialization)");

        Ok(Self { provider: Arc::new(provider), rpc_url: rpc_url.to_string() })
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// RPC endpoint this client talks to.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn erc20(&self, contract: Address) -> IERC20::IERC20Instance<HttpProvider> {
        IERC20::new(contract, self.provider().clone())
    }
}

#[async_trait]
impl ChainClient for EthereumClient {
    async fn erc20_balance_of(&self, contract: Address, wallet: Address) -> Result<U256> {
        let balance = self.erc20(contract).balanceOf(wallet).call().await?;
        Ok(balance)
    }

    async fn erc20_decimals(&self, contract: Address) -> Result<u8> {
        let decimals = self.erc20(contract).decimals().call().await?;
        Ok(decimals)
    }

    async fn erc20_symbol(&self, contract: Address) -> Result<String> {
        let symbol = self.erc20(contract).symbol().call().await?;
        Ok(symbol)
    }

    async fn erc20_name(&self, contract: Address) -> Result<String> {
        let name = self.erc20(contract).name().call().await?;
        Ok(name)
    }

    async fn native_balance(&self, wallet: Address) -> Result<U256> {
        let balance = self.provider.get_balance(wallet).await?;
        Ok(balance)
    }

    async fn current_block(&self) -> Result<u64> {
        let block = self.provider.get_block_number().await?;
        Ok(block)
    }

    async fn network_id(&self) -> Result<u64> {
        let id = self.provider.get_net_version().await?;
        tracing::debug!(network_id = id, rpc_url = %self.rpc_url, "Fetched network id");
        Ok(id)
    }
}
