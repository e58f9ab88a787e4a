//! Ticker symbol and exchange name resolution.
//!
//! Maps a ticker symbol to a token contract and an exchange name to its hot
//! wallet. Tables are static: built once at startup from the built-in mainnet
//! set, a JSON file, or a JSON document fetched over HTTP, and read-only after.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use alloy::primitives::Address;
use serde::Deserialize;
use tracing::info;

use crate::{
    config::NameTablesSource,
    error::{AppError, Result},
    ethereum::constants::{
        BINANCE_WALLET, BITFINEX_WALLET, COINBASE_WALLET, DAI_ADDRESS, KRAKEN_WALLET,
        LINK_ADDRESS, UNI_ADDRESS, USDC_ADDRESS, USDT_ADDRESS, WBTC_ADDRESS, WETH_ADDRESS,
    },
    types::parse_address,
};

/// Timeout for fetching remote tables.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Tables Document
// ============================================================================

/// On-disk / over-the-wire form of the lookup tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameTablesDocument {
    /// Match keys ignoring ASCII case.
    #[serde(default)]
    pub case_insensitive: bool,
    /// Ticker symbol to contract address.
    #[serde(default)]
    pub symbols: HashMap<String, String>,
    /// Exchange name to wallet address.
    #[serde(default)]
    pub exchanges: HashMap<String, String>,
}

// ============================================================================
// Resolver Trait
// ============================================================================

/// Trait for symbolic name lookups.
///
/// Implementations must not perform network I/O on lookup.
pub trait NameResolverTrait: Send + Sync {
    /// Resolve a ticker symbol to a token contract address.
    fn resolve_symbol(&self, ticker: &str) -> Result<Address>;

    /// Resolve an exchange name to a wallet address.
    fn resolve_exchange(&self, name: &str) -> Result<Address>;
}

// ============================================================================
// Name Resolver
// ============================================================================

/// Static lookup tables for symbols and exchanges.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    symbols: HashMap<String, Address>,
    exchanges: HashMap<String, Address>,
    case_insensitive: bool,
}

impl NameResolver {
    /// Build a resolver from already parsed entries.
    ///
    /// Fails when two entries of one table map to the same lookup key.
    pub fn new(
        symbols: impl IntoIterator<Item = (String, Address)>,
        exchanges: impl IntoIterator<Item = (String, Address)>,
        case_insensitive: bool,
    ) -> Result<Self> {
        Ok(Self {
            symbols: build_table("symbol", symbols, case_insensitive)?,
            exchanges: build_table("exchange", exchanges, case_insensitive)?,
            case_insensitive,
        })
    }

    /// Well-known mainnet tokens and exchange wallets.
    pub fn builtin() -> Self {
        let symbols = [
            ("WETH", WETH_ADDRESS),
            ("USDC", USDC_ADDRESS),
            ("USDT", USDT_ADDRESS),
            ("DAI", DAI_ADDRESS),
            ("WBTC", WBTC_ADDRESS),
            ("UNI", UNI_ADDRESS),
            ("LINK", LINK_ADDRESS),
        ];
        let exchanges = [
            ("binance", BINANCE_WALLET),
            ("coinbase", COINBASE_WALLET),
            ("kraken", KRAKEN_WALLET),
            ("bitfinex", BITFINEX_WALLET),
        ];
        Self {
            symbols: symbols.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            exchanges: exchanges.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            case_insensitive: false,
        }
    }

    /// Build a resolver from a tables document, validating every address.
    pub fn from_document(doc: NameTablesDocument) -> Result<Self> {
        let symbols = parse_table("symbol", doc.symbols)?;
        let exchanges = parse_table("exchange", doc.exchanges)?;
        Self::new(symbols, exchanges, doc.case_insensitive)
    }

    /// Build a resolver from a JSON tables document.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: NameTablesDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Load tables from a JSON file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Config(format!("Failed to read name tables {}: {}", path.display(), e))
        })?;
        let resolver = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            symbols = resolver.symbols.len(),
            exchanges = resolver.exchanges.len(),
            "Loaded name tables"
        );
        Ok(resolver)
    }

    /// Fetch tables from a URL serving the JSON document.
    pub async fn from_url(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to fetch name tables: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Transport(format!(
                "Name tables endpoint returned status: {}",
                response.status()
            )));
        }

        let doc: NameTablesDocument = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse name tables: {}", e)))?;

        let resolver = Self::from_document(doc)?;
        info!(
            url = %url,
            symbols = resolver.symbols.len(),
            exchanges = resolver.exchanges.len(),
            "Fetched name tables"
        );
        Ok(resolver)
    }

    /// Build the resolver described by the configuration.
    pub async fn load(source: &NameTablesSource) -> Result<Self> {
        match source {
            NameTablesSource::Builtin => {
                info!("Using built-in mainnet name tables");
                Ok(Self::builtin())
            }
            NameTablesSource::File(path) => Self::from_file(path).await,
            NameTablesSource::Url(url) => Self::from_url(url).await,
        }
    }

    fn key<'a>(&self, raw: &'a str) -> std::borrow::Cow<'a, str> {
        if self.case_insensitive {
            std::borrow::Cow::Owned(raw.to_ascii_lowercase())
        } else {
            std::borrow::Cow::Borrowed(raw)
        }
    }
}

impl NameResolverTrait for NameResolver {
    fn resolve_symbol(&self, ticker: &str) -> Result<Address> {
        self.symbols
            .get(&*self.key(ticker))
            .copied()
            .ok_or_else(|| AppError::UnknownSymbol(format!("no contract for symbol '{}'", ticker)))
    }

    fn resolve_exchange(&self, name: &str) -> Result<Address> {
        self.exchanges
            .get(&*self.key(name))
            .copied()
            .ok_or_else(|| AppError::UnknownExchange(format!("no wallet for exchange '{}'", name)))
    }
}

fn parse_table(what: &str, table: HashMap<String, String>) -> Result<Vec<(String, Address)>> {
    table
        .into_iter()
        .map(|(name, raw)| {
            let address = parse_address(&raw).map_err(|e| {
                AppError::InvalidAddress(format!("{} '{}' in name tables: {}", what, name, e))
            })?;
            Ok((name, address))
        })
        .collect()
}

fn build_table(
    what: &str,
    entries: impl IntoIterator<Item = (String, Address)>,
    case_insensitive: bool,
) -> Result<HashMap<String, Address>> {
    let mut entries: Vec<_> = entries.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table: HashMap<String, (String, Address)> = HashMap::with_capacity(entries.len());
    for (name, address) in entries {
        let key = if case_insensitive { name.to_ascii_lowercase() } else { name.clone() };
        if let Some((existing, _)) = table.get(&key) {
            return Err(AppError::Config(format!(
                "{} '{}' collides with '{}' in name tables",
                what, name, existing
            )));
        }
        table.insert(key, (name, address));
    }

    Ok(table.into_iter().map(|(key, (_, address))| (key, address)).collect())
}
