//! Sequential fan-in read path.

use bytes::BytesMut;
use distributor_core::{DownloadedFile, ResourceId};
use distributor_storage::StorageError;

use crate::distributor::BackendSet;
use crate::error::DistributeError;
use crate::registry::ChunkRegistry;

/// Reassembles a resource by reading its chunks back one at a time, in order.
#[derive(Clone)]
pub struct DownloadOrchestrator {
    backends: BackendSet,
    registry: ChunkRegistry,
}

impl DownloadOrchestrator {
    pub fn new(backends: BackendSet, registry: ChunkRegistry) -> Self {
        Self { backends, registry }
    }

    /// Fetch every chunk of `resource_id` and concatenate them.
    ///
    /// Only committed entries are readable. The first failing read aborts the
    /// whole download; nothing partial is returned.
    #[tracing::instrument(skip(self, resource_id), fields(resource_id = %resource_id))]
    pub async fn download(&self, resource_id: &ResourceId) -> Result<DownloadedFile, DistributeError> {
        let entry = match self.registry.get(resource_id).await {
            Some(entry) if entry.is_committed() && !entry.records.is_empty() => entry,
            Some(entry) => {
                tracing::debug!(state = ?entry.state, "Resource is not readable");
                return Err(DistributeError::NotFound(resource_id.clone()));
            }
            None => return Err(DistributeError::NotFound(resource_id.clone())),
        };

        let mut data = BytesMut::new();
        for record in &entry.records {
            let order = record.order;
            let backend = self.backends.get(order as usize).ok_or_else(|| {
                DistributeError::UnknownBackend {
                    resource_id: resource_id.clone(),
                    order,
                }
            })?;

            tracing::debug!(order, backend = %backend.location(), "Getting part from backend");

            let chunk = backend
                .get_chunk(resource_id.as_str())
                .await
                .map_err(|source| DistributeError::Download { order, source })?;

            if chunk.order != order {
                return Err(DistributeError::Download {
                    order,
                    source: StorageError::DownloadFailed(format!(
                        "backend returned chunk order {} instead of {}",
                        chunk.order, order
                    )),
                });
            }

            data.extend_from_slice(&chunk.data);
        }

        // Every record of a resource carries the same file name.
        let file_name = entry.records[0].file_name.clone();

        tracing::info!(
            file_name = %file_name,
            size = data.len(),
            chunks = entry.records.len(),
            "File reassembled"
        );

        Ok(DownloadedFile {
            file_name,
            data: data.freeze(),
        })
    }
}
