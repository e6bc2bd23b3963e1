//! Route configuration and setup.

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use distributor_infra::request_id_middleware;
use distributor_storage::{
    protocol::{GET_CHUNK_PATH, SAVE_CHUNK_PATH},
    MemoryBackend,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::chunks;

/// Node state: the chunk store itself.
pub struct NodeState {
    pub store: MemoryBackend,
}

impl NodeState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            store: MemoryBackend::new(label),
        }
    }
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Setup node routes; request bodies above `max_chunk_size_bytes` are refused.
pub fn setup_routes(state: Arc<NodeState>, max_chunk_size_bytes: usize) -> Router {
    Router::new()
        .route(SAVE_CHUNK_PATH, post(chunks::save_chunk))
        .route(GET_CHUNK_PATH, get(chunks::get_chunk))
        .route("/health/live", get(liveness_check))
        .layer(DefaultBodyLimit::max(max_chunk_size_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}
