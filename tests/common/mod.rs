//! Common utilities for integration tests.

#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use token_balance_server::{
    api::{self, AppState},
    config::DEFAULT_REQUEST_TIMEOUT,
    services::{BalanceService, NameResolver},
    AppError, ChainClient, Result,
};

/// Chain client with canned answers for every read.
pub struct MockChain {
    pub balance: U256,
    pub decimals: Option<u8>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub eth_balance: U256,
    pub block: u64,
    pub network_id: u64,
    /// Every call fails as if the node were unreachable.
    pub offline: bool,
    /// `balanceOf` never answers.
    pub stall_balance: bool,
    pub calls: AtomicUsize,
}

impl Default for MockChain {
    fn default() -> Self {
        Self {
            balance: U256::from(1_000_000_000_000_000_000u64),
            decimals: Some(18),
            symbol: Some("USDC".into()),
            name: Some("USD Coin".into()),
            eth_balance: U256::from(500_000_000_000_000_000u64),
            block: 19_000_000,
            network_id: 1,
            offline: false,
            stall_balance: false,
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockChain {
    pub fn offline() -> Self {
        Self { offline: true, ..Default::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn read<T>(&self, value: Option<T>) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(AppError::Transport("error sending request: connection refused".into()));
        }
        value.ok_or_else(|| AppError::Chain("execution reverted".into()))
    }
}

#[async_trait]
impl ChainClient for MockChain {
    async fn erc20_balance_of(&self, _contract: Address, _wallet: Address) -> Result<U256> {
        if self.stall_balance {
            self.calls.fetch_add(1, Ordering::SeqCst);
            return std::future::pending().await;
        }
        self.read(Some(self.balance))
    }

    async fn erc20_decimals(&self, _contract: Address) -> Result<u8> {
        self.read(self.decimals)
    }

    async fn erc20_symbol(&self, _contract: Address) -> Result<String> {
        self.read(self.symbol.clone())
    }

    async fn erc20_name(&self, _contract: Address) -> Result<String> {
        self.read(self.name.clone())
    }

    async fn native_balance(&self, _wallet: Address) -> Result<U256> {
        self.read(Some(self.eth_balance))
    }

    async fn current_block(&self) -> Result<u64> {
        self.read(Some(self.block))
    }

    async fn network_id(&self) -> Result<u64> {
        self.read(Some(self.network_id))
    }
}

/// Router wired to the mock chain and the built-in name tables.
pub fn create_test_app(chain: MockChain) -> (Router, Arc<MockChain>) {
    create_test_app_with_timeout(chain, DEFAULT_REQUEST_TIMEOUT)
}

/// Like [`create_test_app`] with a custom request budget.
pub fn create_test_app_with_timeout(
    chain: MockChain,
    request_timeout: Duration,
) -> (Router, Arc<MockChain>) {
    let chain = Arc::new(chain);
    let balances = BalanceService::new(chain.clone(), Arc::new(NameResolver::builtin()));
    (api::router(AppState::new(balances), request_timeout), chain)
}

/// Issue a GET and return status, content type and body text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Issue a GET and parse the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const WALLET: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
