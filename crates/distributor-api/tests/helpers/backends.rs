//! Backend doubles.

use async_trait::async_trait;
use bytes::Bytes;
use distributor_core::BackendKind;
use distributor_services::{Chunk, ChunkBackend, StorageError, StorageResult};
use distributor_storage::MemoryBackend;

/// Rejects every request.
pub struct FailingBackend;

#[async_trait]
impl ChunkBackend for FailingBackend {
    async fn save_chunk(&self, _name: &str, _order: u32, _data: Bytes) -> StorageResult<()> {
        Err(StorageError::UploadFailed("node rejected chunk".to_string()))
    }

    async fn get_chunk(&self, _name: &str) -> StorageResult<Chunk> {
        Err(StorageError::DownloadFailed("node unavailable".to_string()))
    }

    fn location(&self) -> String {
        "failing://node".to_string()
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Http
    }
}

/// Stores chunks normally but fails every read.
pub struct WriteOnlyBackend {
    inner: MemoryBackend,
}

impl WriteOnlyBackend {
    pub fn new(addr: &str) -> Self {
        Self {
            inner: MemoryBackend::new(addr),
        }
    }
}

#[async_trait]
impl ChunkBackend for WriteOnlyBackend {
    async fn save_chunk(&self, name: &str, order: u32, data: Bytes) -> StorageResult<()> {
        self.inner.save_chunk(name, order, data).await
    }

    async fn get_chunk(&self, _name: &str) -> StorageResult<Chunk> {
        Err(StorageError::DownloadFailed("read timed out".to_string()))
    }

    fn location(&self) -> String {
        self.inner.location()
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }
}
