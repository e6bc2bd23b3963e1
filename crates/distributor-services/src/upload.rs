//! Fan-out write path.

use bytes::Bytes;
use distributor_core::{ChunkLocation, ResourceId, UploadReceipt};
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use tokio::task::JoinSet;

use crate::distributor::BackendSet;
use crate::error::DistributeError;
use crate::registry::ChunkRegistry;
use crate::splitter::split;

/// Computes SHA-256 of `data` and returns the hex-encoded digest.
pub fn checksum_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Splits a file into one part per backend and writes every part concurrently.
///
/// Backend selection is positional: part `i` goes to backend `i`, and `i` is
/// recorded as the chunk's order.
#[derive(Clone)]
pub struct UploadOrchestrator {
    backends: BackendSet,
    registry: ChunkRegistry,
}

impl UploadOrchestrator {
    pub fn new(backends: BackendSet, registry: ChunkRegistry) -> Result<Self, DistributeError> {
        if backends.is_empty() {
            return Err(DistributeError::NoBackends);
        }
        Ok(Self { backends, registry })
    }

    /// Distribute `data` and return the new resource identifier and checksum.
    ///
    /// The first failing part aborts the upload; sibling tasks still running
    /// are cancelled. Chunks already accepted by other backends are not
    /// removed and their records stay in the registry under a `Failed` entry,
    /// which download treats as unknown.
    #[tracing::instrument(skip(self, data), fields(file_size = data.len(), resource_id = tracing::field::Empty))]
    pub async fn upload(
        &self,
        file_name: &str,
        data: Bytes,
    ) -> Result<UploadReceipt, DistributeError> {
        let checksum = checksum_hex(&data);
        let resource_id = ResourceId::new();
        tracing::Span::current().record("resource_id", tracing::field::display(&resource_id));

        let part_count = NonZeroUsize::new(self.backends.len()).ok_or(DistributeError::NoBackends)?;
        let parts = split(&data, part_count);

        self.registry
            .create_empty(resource_id.clone(), parts.len())
            .await;

        let mut tasks = JoinSet::new();
        for (order, (part, backend)) in (0u32..).zip(parts.into_iter().zip(self.backends.iter())) {
            let backend = backend.clone();
            let registry = self.registry.clone();
            let resource_id = resource_id.clone();
            let file_name = file_name.to_string();

            tasks.spawn(async move {
                tracing::debug!(
                    resource_id = %resource_id,
                    order,
                    chunk_size = part.len(),
                    backend = %backend.location(),
                    "Sending part to backend"
                );

                backend
                    .save_chunk(resource_id.as_str(), order, part)
                    .await
                    .map_err(|source| DistributeError::Upload { order, source })?;

                registry
                    .append(
                        &resource_id,
                        ChunkLocation {
                            resource_id: resource_id.clone(),
                            file_name,
                            order,
                            backend_ref: backend.location(),
                        },
                    )
                    .await;

                Ok::<u32, DistributeError>(order)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|e| DistributeError::TaskFailed(e.to_string()))
                .and_then(|result| result);

            if let Err(err) = outcome {
                tasks.abort_all();
                self.registry.mark_failed(&resource_id).await;

                tracing::warn!(
                    resource_id = %resource_id,
                    error = %err,
                    "Upload aborted; chunks already stored are left in place"
                );
                return Err(err);
            }
        }

        self.registry.commit(&resource_id).await;

        tracing::info!(
            resource_id = %resource_id,
            file_name = %file_name,
            checksum = %checksum,
            "File uploaded successfully"
        );

        Ok(UploadReceipt {
            resource: resource_id,
            checksum,
        })
    }
}
