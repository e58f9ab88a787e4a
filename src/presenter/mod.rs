//! Rendering of balance results for HTTP responses.
//!
//! Numeric balances are always rendered as decimal strings so no precision is
//! lost to floating point on the client side.

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    types::TokenBalance,
};

/// Body returned by the plain-text balance endpoint when a query fails.
///
/// Unresolvable queries read as a zero balance there. This hides real
/// failures behind a valid-looking number and is kept only because existing
/// clients depend on it; the JSON endpoints report errors explicitly.
pub const PLAIN_BALANCE_ON_ERROR: &str = "0.0";

/// Structured balance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalanceJson {
    /// Token contract address (checksummed).
    pub token: String,
    /// Wallet address (checksummed).
    pub wallet: String,
    /// Token name, omitted when the contract does not expose one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Token symbol, omitted when the contract does not expose one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Raw token balance in the smallest unit.
    pub balance: String,
    /// Native balance in wei.
    pub eth_balance: String,
    /// Token decimals.
    pub decimals: u8,
    /// Block the balance was read at.
    pub block: u64,
    /// Token balance at native precision. Only present on `/labustoken`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labus_balance: Option<String>,
}

/// Structured error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `true`.
    pub error: bool,
    /// Human-readable cause.
    pub message: String,
}

/// Node liveness report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the node answered the network id request.
    pub online: bool,
    /// Network id reported by the node, `0` when offline.
    pub chain: u64,
}

impl HealthResponse {
    /// Report built from a network id lookup; any failure reads as offline.
    pub fn from_network_id(result: Result<u64>) -> Self {
        match result {
            Ok(chain) => Self { online: true, chain },
            Err(_) => Self { online: false, chain: 0 },
        }
    }
}

/// Render a result as a keyed record.
pub fn to_structured(result: &TokenBalance) -> TokenBalanceJson {
    TokenBalanceJson {
        token: result.contract.to_checksum(None),
        wallet: result.wallet.to_checksum(None),
        name: result.name.clone().filter(|n| !n.is_empty()),
        symbol: result.symbol.clone().filter(|s| !s.is_empty()),
        balance: result.balance.to_string(),
        eth_balance: result.eth_balance.to_string(),
        decimals: result.decimals,
        block: result.block,
        labus_balance: None,
    }
}

/// Render a result as a keyed record including the derived balance.
pub fn to_labus_structured(result: &TokenBalance) -> TokenBalanceJson {
    TokenBalanceJson {
        labus_balance: result.labus_balance.map(|b| b.to_string()),
        ..to_structured(result)
    }
}

/// Render a failure as a structured error payload.
pub fn error_structured(err: &AppError) -> ErrorResponse {
    ErrorResponse { error: true, message: err.to_string() }
}

/// Render only the scaled balance, or [`PLAIN_BALANCE_ON_ERROR`] on failure.
pub fn to_plain_balance(result: &Result<TokenBalance>) -> String {
    match result {
        Ok(balance) => balance.balance_string(),
        Err(_) => PLAIN_BALANCE_ON_ERROR.to_string(),
    }
}
