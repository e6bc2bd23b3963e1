use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{extract_multipart_file, validate_file_size};

/// Accept one file and distribute it across the backends.
///
/// Responds `201 Created` with the resource id and the SHA-256 of the content.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let (data, filename) = extract_multipart_file(multipart?).await?;

    validate_file_size(data.len(), state.config.max_upload_size_bytes())?;

    tracing::info!(
        file_name = %filename,
        file_size = data.len(),
        "Upload received"
    );

    let receipt = state.distributor.upload(&filename, data).await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}
