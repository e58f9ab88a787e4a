//! HTTP API module.
//!
//! Routes:
//! - `GET /balance/{contract}/{wallet}`: scaled balance as plain text
//! - `GET /token/{contract}/{wallet}`: full balance record as JSON
//! - `GET /labustoken/{symbol}/{exchange}`: same record, looked up by name
//! - `GET /health`: node liveness

pub mod health;
pub mod token;

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::services::BalanceService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub balances: BalanceService,
}

impl AppState {
    pub fn new(balances: BalanceService) -> Self {
        Self { balances }
    }
}

/// Build the application router.
///
/// Requests still running after `request_timeout` are dropped, cancelling
/// their chain reads, and answered with 408.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/balance/{contract}/{wallet}", get(token::get_balance))
        .route("/token/{contract}/{wallet}", get(token::get_token))
        .route("/labustoken/{symbol}/{exchange}", get(token::get_labus_token))
        .route("/health", get(health::health_check))
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
