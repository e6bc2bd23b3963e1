//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Liveness check: the process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness check: the backend set is in place.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let distributor = &state.distributor;

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "backend_kind": state.config.backend_kind().to_string(),
            "backends": distributor.backend_count(),
            "resources": distributor.registry().len().await,
        })),
    )
}
