//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::{env, time::Duration};

use crate::error::AppError;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default budget for answering one HTTP request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the symbol and exchange tables come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTablesSource {
    /// Built-in mainnet tables.
    Builtin,
    /// JSON file on disk.
    File(String),
    /// JSON document served over HTTP.
    Url(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Address to bind the HTTP server to.
    pub host: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Logging level (default: info).
    pub log_level: String,
    /// Source of the name resolver tables.
    pub name_tables: NameTablesSource,
    /// Budget for answering one HTTP request.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Bind port (default: 8080)
    /// - `LOG_LEVEL`: Logging level (default: info)
    /// - `NAME_TABLES_PATH`: JSON file with symbol and exchange tables
    /// - `NAME_TABLES_URL`: URL serving the same JSON, used when no path is set
    /// - `REQUEST_TIMEOUT_SECS`: Per-request budget in seconds (default: 15)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let rpc_url = env::var("ETHEREUM_RPC_URL").map_err(|_| {
            AppError::Config("ETHEREUM_RPC_URL environment variable not set".into())
        })?;

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let name_tables = name_tables_source(
            env::var("NAME_TABLES_PATH").ok(),
            env::var("NAME_TABLES_URL").ok(),
        );

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self { rpc_url, host, port, log_level, name_tables, request_timeout })
    }

    /// Socket address string for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid PORT '{}': {}", raw, e)))
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::Config("REQUEST_TIMEOUT_SECS must be positive".into())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(AppError::Config(format!("Invalid REQUEST_TIMEOUT_SECS '{}': {}", raw, e))),
    }
}

fn name_tables_source(path: Option<String>, url: Option<String>) -> NameTablesSource {
    match (path.filter(|p| !p.is_empty()), url.filter(|u| !u.is_empty())) {
        (Some(path), _) => NameTablesSource::File(path),
        (None, Some(url)) => NameTablesSource::Url(url),
        (None, None) => NameTablesSource::Builtin,
    }
}
