//! Balance resolution service.

use alloy::primitives::Address;
use std::{fmt, sync::Arc};

use crate::{
    error::{AppError, Result},
    ethereum::ChainClient,
    services::name_resolver::NameResolverTrait,
    types::{labus_balance, parse_address, TokenBalance},
};

/// A reference to a contract or wallet as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRef {
    /// Already parsed address.
    Address(Address),
    /// Hex text still to be parsed.
    Hex(String),
    /// Symbolic name: a ticker for contracts, an exchange for wallets.
    Name(String),
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRef::Address(address) => write!(f, "{address}"),
            AccountRef::Hex(text) | AccountRef::Name(text) => f.write_str(text),
        }
    }
}

/// Service for resolving ERC20 balances into [`TokenBalance`] records.
///
/// Stateless apart from the shared chain client and read-only name tables,
/// so one instance serves any number of concurrent queries. Nothing is cached
/// and nothing is retried: each query repeats every chain read exactly once.
#[derive(Clone)]
pub struct BalanceService {
    client: Arc<dyn ChainClient>,
    names: Arc<dyn NameResolverTrait>,
}

impl BalanceService {
    /// Create a new balance service.
    pub fn new(client: Arc<dyn ChainClient>, names: Arc<dyn NameResolverTrait>) -> Self {
        Self { client, names }
    }

    /// Normalize a contract reference, resolving ticker symbols.
    pub fn resolve_contract(&self, contract: &AccountRef) -> Result<Address> {
        match contract {
            AccountRef::Address(address) => Ok(*address),
            AccountRef::Hex(text) => parse_address(text),
            AccountRef::Name(ticker) => self.names.resolve_symbol(ticker),
        }
    }

    /// Normalize a wallet reference, resolving exchange names.
    pub fn resolve_wallet(&self, wallet: &AccountRef) -> Result<Address> {
        match wallet {
            AccountRef::Address(address) => Ok(*address),
            AccountRef::Hex(text) => parse_address(text),
            AccountRef::Name(exchange) => self.names.resolve_exchange(exchange),
        }
    }

    /// Resolve the balance of `contract` held by `wallet`.
    ///
    /// Both references are normalized before any chain read is issued.
    pub async fn resolve(
        &self,
        contract: &AccountRef,
        wallet: &AccountRef,
    ) -> Result<TokenBalance> {
        let contract = self.resolve_contract(contract)?;
        let wallet = self.resolve_wallet(wallet)?;
        self.get_token_balance(contract, wallet).await
    }

    /// Read the balance record for an already normalized address pair.
    ///
    /// `balanceOf`, the native balance and the block number are mandatory;
    /// the first of them to fail aborts the query and drops the reads still
    /// in flight. `decimals`, `symbol` and `name` degrade to defaults.
    pub async fn get_token_balance(
        &self,
        contract: Address,
        wallet: Address,
    ) -> Result<TokenBalance> {
        tracing::debug!(contract = %contract, wallet = %wallet, "Querying token balance");

        let client = &self.client;

        let mandatory = async {
            tokio::try_join!(
                async {
                    client
                        .erc20_balance_of(contract, wallet)
                        .await
                        .map_err(|e| chain_failure("balanceOf", e))
                },
                async {
                    client
                        .native_balance(wallet)
                        .await
                        .map_err(|e| chain_failure("eth_getBalance", e))
                },
                async {
                    client.current_block().await.map_err(|e| chain_failure("eth_blockNumber", e))
                },
            )
        };

        let optional = async {
            Ok::<_, AppError>(tokio::join!(
                client.erc20_decimals(contract),
                client.erc20_symbol(contract),
                client.erc20_name(contract),
            ))
        };

        let ((balance, eth_balance, block), (decimals, symbol, name)) =
            tokio::try_join!(mandatory, optional)?;

        let decimals = optional_field(contract, "decimals", decimals).unwrap_or(0);
        let symbol = optional_text(contract, "symbol", symbol);
        let name = optional_text(contract, "name", name);

        tracing::debug!(
            contract = %contract,
            wallet = %wallet,
            balance = %balance,
            decimals = decimals,
            block = block,
            "Resolved token balance"
        );

        Ok(TokenBalance {
            contract,
            wallet,
            name,
            symbol,
            balance,
            decimals,
            eth_balance,
            block,
            labus_balance: Some(labus_balance(balance, decimals, eth_balance)),
        })
    }

    /// Network identifier of the connected node.
    pub async fn network_id(&self) -> Result<u64> {
        self.client.network_id().await
    }
}

fn chain_failure(call: &str, err: AppError) -> AppError {
    match err {
        AppError::Chain(msg) => AppError::Chain(format!("{call}: {msg}")),
        other => AppError::Chain(format!("{call}: {other}")),
    }
}

/// Collapse an optional metadata read to `Option`, logging read errors.
fn optional_field<T>(contract: Address, field: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(contract = %contract, field, error = %e, "ERC20 metadata call failed");
            None
        }
    }
}

/// Like [`optional_field`], also treating an empty string as not exposed.
fn optional_text(contract: Address, field: &'static str, result: Result<String>) -> Option<String> {
    let value = optional_field(contract, field, result)?;
    if value.is_empty() {
        tracing::debug!(contract = %contract, field, "ERC20 metadata not exposed");
        None
    } else {
        Some(value)
    }
}
