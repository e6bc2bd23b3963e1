use crate::traits::{validate_name, Chunk, ChunkBackend, StorageError, StorageResult};
use crate::BackendKind;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory backend implementation
///
/// Stands in for a storage node when none is running. Chunks live for the
/// lifetime of the value; saving again under the same name replaces the chunk.
pub struct MemoryBackend {
    addr: String,
    storage: Mutex<HashMap<String, Chunk>>,
}

impl MemoryBackend {
    /// Create an empty backend
    ///
    /// # Arguments
    /// * `addr` - Label for log lines and the chunk's backend reference
    ///   (e.g., the node address this slot replaces)
    pub fn new(addr: impl Into<String>) -> Self {
        MemoryBackend {
            addr: addr.into(),
            storage: Mutex::new(HashMap::new()),
        }
    }

    /// Number of chunks currently held
    pub async fn len(&self) -> usize {
        self.storage.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.storage.lock().await.is_empty()
    }
}

#[async_trait]
impl ChunkBackend for MemoryBackend {
    async fn save_chunk(&self, name: &str, order: u32, data: Bytes) -> StorageResult<()> {
        validate_name(name)?;

        tracing::debug!(
            resource_id = %name,
            order,
            chunk_size = data.len(),
            backend = %self.addr,
            "Storing chunk in memory"
        );

        self.storage
            .lock()
            .await
            .insert(name.to_string(), Chunk { order, data });

        Ok(())
    }

    async fn get_chunk(&self, name: &str) -> StorageResult<Chunk> {
        validate_name(name)?;

        tracing::debug!(
            resource_id = %name,
            backend = %self.addr,
            "Getting chunk from memory"
        );

        self.storage
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("resource {:?} not found", name)))
    }

    fn location(&self) -> String {
        let host = self.addr.rsplit("://").next().unwrap_or(&self.addr);
        format!("memory://{}", host)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }
}
