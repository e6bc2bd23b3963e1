use distributor_core::ResourceId;
use distributor_storage::StorageError;
use thiserror::Error;

/// Errors raised while distributing or reassembling a file
#[derive(Debug, Error)]
pub enum DistributeError {
    #[error("no storage backends configured")]
    NoBackends,

    #[error("resource {0} not found")]
    NotFound(ResourceId),

    #[error("failed to upload part {order} to backend: {source}")]
    Upload {
        order: u32,
        #[source]
        source: StorageError,
    },

    #[error("failed to get part {order} from backend: {source}")]
    Download {
        order: u32,
        #[source]
        source: StorageError,
    },

    #[error("chunk order {order} of resource {resource_id} has no backend")]
    UnknownBackend { resource_id: ResourceId, order: u32 },

    #[error("upload task failed: {0}")]
    TaskFailed(String),
}
