use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
};
use distributor_core::{AppError, ResourceId};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub resource_id: Option<String>,
}

/// Reassemble a previously uploaded file and send it as an attachment.
#[tracing::instrument(skip(state, query))]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let Query(query) = query?;

    let resource_id = query
        .resource_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Resource ID is required".to_string()))?;
    let resource_id = ResourceId::from(resource_id);

    let file = state.distributor.download(&resource_id).await?;

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file.file_name))
        .map_err(|e| AppError::Internal(format!("Invalid Content-Disposition header: {}", e)))?;

    tracing::info!(
        resource_id = %resource_id,
        file_name = %file.file_name,
        size = file.data.len(),
        "Serving download"
    );

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, HeaderValue::from(file.data.len())),
        ],
        file.data,
    ))
}
