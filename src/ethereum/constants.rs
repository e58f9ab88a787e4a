//! Ethereum network constants.
//!
//! Contains mainnet token addresses and well-known exchange wallets.

use alloy::primitives::{address, Address};

// ============================================================================
// Token Addresses (Ethereum Mainnet)
// ============================================================================

/// Wrapped Ether (WETH) address on Ethereum Mainnet.
pub const WETH_ADDRESS: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// USDC address on Ethereum Mainnet.
pub const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// USDT address on Ethereum Mainnet.
pub const USDT_ADDRESS: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");

/// DAI address on Ethereum Mainnet.
pub const DAI_ADDRESS: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");

/// WBTC address on Ethereum Mainnet.
pub const WBTC_ADDRESS: Address = address!("2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");

/// UNI token address on Ethereum Mainnet.
pub const UNI_ADDRESS: Address = address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984");

/// LINK token address on Ethereum Mainnet.
pub const LINK_ADDRESS: Address = address!("514910771AF9Ca656af840dff83E8264EcF986CA");

// ============================================================================
// Exchange Hot Wallets (Ethereum Mainnet)
// ============================================================================

/// Binance hot wallet (Binance 14).
pub const BINANCE_WALLET: Address = address!("28C6c06298d514Db089934071355E5743bf21d60");

/// Coinbase hot wallet (Coinbase 10).
pub const COINBASE_WALLET: Address = address!("A9D1e08C7793af67e9d92fe308d5697FB81d3E43");

/// Kraken hot wallet (Kraken 4).
pub const KRAKEN_WALLET: Address = address!("267be1C1D684F78cb4F6a176C4911b741E4Ffdc0");

/// Bitfinex hot wallet (Bitfinex 2).
pub const BITFINEX_WALLET: Address = address!("1151314c646Ce4E0eFD76d1aF4760aE66a9Fe30F");
