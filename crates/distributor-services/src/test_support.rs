//! Backend doubles shared by the orchestrator tests.

use async_trait::async_trait;
use bytes::Bytes;
use distributor_storage::{
    BackendKind, Chunk, ChunkBackend, MemoryBackend, StorageError, StorageResult,
};
use std::sync::Arc;
use std::time::Duration;

pub fn memory_backends(count: usize) -> Vec<Arc<dyn ChunkBackend>> {
    (0..count)
        .map(|i| Arc::new(MemoryBackend::new(format!("slot-{}", i))) as Arc<dyn ChunkBackend>)
        .collect()
}

/// Refuses every write and read.
pub struct FailingBackend {
    addr: String,
}

impl FailingBackend {
    pub fn new(addr: &str) -> Self {
        Self {
            addr: addr.to_string(),
        }
    }
}

#[async_trait]
impl ChunkBackend for FailingBackend {
    async fn save_chunk(&self, _name: &str, _order: u32, _data: Bytes) -> StorageResult<()> {
        Err(StorageError::UploadFailed(format!(
            "{} is out of space",
            self.addr
        )))
    }

    async fn get_chunk(&self, _name: &str) -> StorageResult<Chunk> {
        Err(StorageError::DownloadFailed(format!("{} is offline", self.addr)))
    }

    fn location(&self) -> String {
        format!("failing://{}", self.addr)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }
}

/// Memory backend that sleeps before every write.
pub struct SlowBackend {
    inner: MemoryBackend,
    delay: Duration,
}

impl SlowBackend {
    pub fn new(addr: &str, delay: Duration) -> Self {
        Self {
            inner: MemoryBackend::new(addr),
            delay,
        }
    }
}

#[async_trait]
impl ChunkBackend for SlowBackend {
    async fn save_chunk(&self, name: &str, order: u32, data: Bytes) -> StorageResult<()> {
        tokio::time::sleep(self.delay).await;
        self.inner.save_chunk(name, order, data).await
    }

    async fn get_chunk(&self, name: &str) -> StorageResult<Chunk> {
        self.inner.get_chunk(name).await
    }

    fn location(&self) -> String {
        self.inner.location()
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }
}
