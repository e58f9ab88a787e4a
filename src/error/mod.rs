//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed address text.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Ticker symbol missing from the symbol table.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Exchange name missing from the exchange table.
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    /// A mandatory chain read failed (reverted, missing contract, node error).
    #[error("Chain error: {0}")]
    Chain(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Machine-distinguishable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    InvalidAddress,
    UnknownSymbol,
    UnknownExchange,
    Chain,
}

impl AppError {
    /// Category of this error.
    ///
    /// Transport failures and unparsable node responses count as chain errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Config(_) => ErrorKind::Config,
            AppError::InvalidAddress(_) => ErrorKind::InvalidAddress,
            AppError::UnknownSymbol(_) => ErrorKind::UnknownSymbol,
            AppError::UnknownExchange(_) => ErrorKind::UnknownExchange,
            AppError::Chain(_) | AppError::Transport(_) | AppError::Parse(_) => ErrorKind::Chain,
        }
    }
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::contract::Error> for AppError {
    fn from(err: alloy::contract::Error) -> Self {
        AppError::Chain(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::InvalidAddress(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
