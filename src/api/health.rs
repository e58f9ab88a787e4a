use axum::{extract::State, Json};

use super::AppState;
use crate::presenter::HealthResponse;

/// `GET /health`: node liveness and network id. Always 200.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let result = state.balances.network_id().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Node health check failed");
    }
    Json(HealthResponse::from_network_id(result))
}
