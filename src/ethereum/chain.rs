//! Chain access abstraction.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::error::Result;

/// Read-only access to an Ethereum node.
///
/// Every call is idempotent. Timeouts and retries belong to the
/// implementation's transport, callers treat each call as a single attempt.
/// Implementations must be shareable across concurrent requests.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// ERC20 `balanceOf(wallet)` on `contract`.
    async fn erc20_balance_of(&self, contract: Address, wallet: Address) -> Result<U256>;

    /// ERC20 `decimals()`. Optional in the standard, may fail on conforming tokens.
    async fn erc20_decimals(&self, contract: Address) -> Result<u8>;

    /// ERC20 `symbol()`. Optional in the standard.
    async fn erc20_symbol(&self, contract: Address) -> Result<String>;

    /// ERC20 `name()`. Optional in the standard.
    async fn erc20_name(&self, contract: Address) -> Result<String>;

    /// Native coin balance in wei.
    async fn native_balance(&self, wallet: Address) -> Result<U256>;

    /// Latest block number.
    async fn current_block(&self) -> Result<u64>;

    /// Network identifier (`net_version`).
    async fn network_id(&self) -> Result<u64>;
}
