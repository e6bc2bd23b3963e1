//! Backend client abstraction
//!
//! This module defines the ChunkBackend trait that every backend slot implements.

use crate::BackendKind;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Chunk not found: {0}")]
    NotFound(String),

    #[error("Invalid chunk name: {0}")]
    InvalidKey(String),

    #[cfg(feature = "backend-http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// The unit physically stored by one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub order: u32,
    pub data: Bytes,
}

/// Backend client capability
///
/// Implementations store raw chunk bytes under `name` (the resource
/// identifier) and hand them back on request. Neither call retries.
#[async_trait]
pub trait ChunkBackend: Send + Sync {
    /// Store `data` under `name`. `order` travels along as metadata.
    async fn save_chunk(&self, name: &str, order: u32, data: Bytes) -> StorageResult<()>;

    /// Fetch the chunk previously stored under `name`.
    async fn get_chunk(&self, name: &str) -> StorageResult<Chunk>;

    /// Human readable location, recorded as the chunk's backend reference.
    fn location(&self) -> String;

    /// Which client variant backs this slot
    fn kind(&self) -> BackendKind;
}

/// Reject names that cannot address a chunk.
pub(crate) fn validate_name(name: &str) -> StorageResult<()> {
    if name.trim().is_empty() {
        return Err(StorageError::InvalidKey(
            "Chunk name cannot be empty".to_string(),
        ));
    }
    Ok(())
}
