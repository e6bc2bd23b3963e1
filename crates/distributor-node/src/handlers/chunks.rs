use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use bytes::Bytes;
use distributor_storage::{protocol::ORDER_HEADER, ChunkBackend};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::NodeError;
use crate::routes::NodeState;

#[derive(Debug, Deserialize)]
pub struct SaveChunkQuery {
    pub name: String,
    pub order: u32,
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct GetChunkQuery {
    pub name: String,
}

/// Store the request body as the chunk named `name`.
///
/// The declared `size` must match the body length.
#[tracing::instrument(skip(state, query, body), fields(chunk_size = body.len()))]
pub async fn save_chunk(
    State(state): State<Arc<NodeState>>,
    query: Result<Query<SaveChunkQuery>, QueryRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, NodeError> {
    let Query(query) = query?;

    if query.size != body.len() {
        return Err(NodeError::BadRequest(format!(
            "declared size {} does not match body length {}",
            query.size,
            body.len()
        )));
    }

    state.store.save_chunk(&query.name, query.order, body).await?;

    tracing::info!(
        resource_id = %query.name,
        order = query.order,
        size = query.size,
        "Chunk stored"
    );

    Ok(StatusCode::OK)
}

/// Return the chunk named `name` with its order in `X-Chunk-Order`.
#[tracing::instrument(skip(state, query))]
pub async fn get_chunk(
    State(state): State<Arc<NodeState>>,
    query: Result<Query<GetChunkQuery>, QueryRejection>,
) -> Result<impl IntoResponse, NodeError> {
    let Query(query) = query?;

    let chunk = state.store.get_chunk(&query.name).await?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (
                HeaderName::from_static(ORDER_HEADER),
                HeaderValue::from(chunk.order),
            ),
        ],
        chunk.data,
    ))
}
