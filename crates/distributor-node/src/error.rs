use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use distributor_infra::ErrorResponse;
use distributor_storage::StorageError;
use thiserror::Error;

/// Errors returned by the node's handlers
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("{0}")]
    BadRequest(String),

    #[error("chunk not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl NodeError {
    fn status(&self) -> StatusCode {
        match self {
            NodeError::BadRequest(_) => StatusCode::BAD_REQUEST,
            NodeError::NotFound(_) => StatusCode::NOT_FOUND,
            NodeError::Storage(StorageError::NotFound(_)) => StatusCode::NOT_FOUND,
            NodeError::Storage(StorageError::InvalidKey(_)) => StatusCode::BAD_REQUEST,
            NodeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for NodeError {
    fn from(rejection: QueryRejection) -> Self {
        NodeError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for NodeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Chunk request failed");
        } else {
            tracing::debug!(error = %self, "Chunk request rejected");
        }

        let body = ErrorResponse::new(self.to_string()).with_type(status.as_str());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            NodeError::BadRequest("size".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NodeError::from(StorageError::NotFound("x".to_string())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            NodeError::from(StorageError::InvalidKey("".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NodeError::from(StorageError::UploadFailed("disk".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
