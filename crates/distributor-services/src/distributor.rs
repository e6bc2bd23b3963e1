use bytes::Bytes;
use distributor_core::{DownloadedFile, ResourceId, UploadReceipt};
use distributor_storage::ChunkBackend;
use std::sync::Arc;

use crate::download::DownloadOrchestrator;
use crate::error::DistributeError;
use crate::registry::ChunkRegistry;
use crate::upload::UploadOrchestrator;

/// Ordered, fixed set of backend slots. Index `i` holds chunk order `i`.
pub type BackendSet = Arc<[Arc<dyn ChunkBackend>]>;

/// Entry point used by the HTTP layer.
///
/// Owns the backend set and the registry and shares both between the upload
/// and download paths. Cheap to clone.
#[derive(Clone)]
pub struct ChunkDistributor {
    backends: BackendSet,
    registry: ChunkRegistry,
    upload: UploadOrchestrator,
    download: DownloadOrchestrator,
}

impl ChunkDistributor {
    pub fn new(backends: Vec<Arc<dyn ChunkBackend>>) -> Result<Self, DistributeError> {
        let backends: BackendSet = backends.into();
        let registry = ChunkRegistry::new();
        let upload = UploadOrchestrator::new(backends.clone(), registry.clone())?;
        let download = DownloadOrchestrator::new(backends.clone(), registry.clone());

        Ok(Self {
            backends,
            registry,
            upload,
            download,
        })
    }

    pub async fn upload(
        &self,
        file_name: &str,
        data: Bytes,
    ) -> Result<UploadReceipt, DistributeError> {
        self.upload.upload(file_name, data).await
    }

    pub async fn download(&self, resource_id: &ResourceId) -> Result<DownloadedFile, DistributeError> {
        self.download.download(resource_id).await
    }

    pub fn backend_count(&self) -> usize {
        self.backends.len()
    }

    pub fn registry(&self) -> &ChunkRegistry {
        &self.registry
    }
}
