//! Balance endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::AppState;
use crate::{
    presenter::{error_structured, to_labus_structured, to_plain_balance, to_structured},
    services::AccountRef,
};

/// `GET /balance/{contract}/{wallet}`
///
/// 200 with the scaled balance, or 404 with `0.0` when the query fails.
pub async fn get_balance(
    State(state): State<AppState>,
    Path((contract, wallet)): Path<(String, String)>,
) -> Response {
    let (contract, wallet) = (AccountRef::Hex(contract), AccountRef::Hex(wallet));
    tracing::info!(contract = %contract, wallet = %wallet, "Fetching /balance");

    let result = state.balances.resolve(&contract, &wallet).await;

    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Balance query failed, answering 0.0");
            StatusCode::NOT_FOUND
        }
    };

    (status, to_plain_balance(&result)).into_response()
}

/// `GET /token/{contract}/{wallet}`
///
/// 200 with the balance record, or 404 with an error payload.
pub async fn get_token(
    State(state): State<AppState>,
    Path((contract, wallet)): Path<(String, String)>,
) -> Response {
    let (contract, wallet) = (AccountRef::Hex(contract), AccountRef::Hex(wallet));
    tracing::info!(contract = %contract, wallet = %wallet, "Fetching /token");

    match state.balances.resolve(&contract, &wallet).await {
        Ok(balance) => (StatusCode::OK, Json(to_structured(&balance))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Token query failed");
            (StatusCode::NOT_FOUND, Json(error_structured(&e))).into_response()
        }
    }
}

/// `GET /labustoken/{symbol}/{exchange}`
///
/// Always 200; failures are reported in the body.
pub async fn get_labus_token(
    State(state): State<AppState>,
    Path((symbol, exchange)): Path<(String, String)>,
) -> Response {
    let (symbol, exchange) = (AccountRef::Name(symbol), AccountRef::Name(exchange));
    tracing::info!(symbol = %symbol, exchange = %exchange, "Fetching /labustoken");

    match state.balances.resolve(&symbol, &exchange).await {
        Ok(balance) => Json(to_labus_structured(&balance)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Labus token query failed");
            Json(error_structured(&e)).into_response()
        }
    }
}
