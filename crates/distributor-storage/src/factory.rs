#[cfg(feature = "backend-http")]
use crate::HttpBackend;
#[cfg(feature = "backend-memory")]
use crate::MemoryBackend;
use crate::{BackendKind, ChunkBackend, StorageError, StorageResult};
use distributor_core::Config;
use std::sync::Arc;

/// Create one backend per configured address, in configuration order
///
/// The position of a backend in the returned list is its slot index, i.e. the
/// chunk order it will be asked to store.
pub fn create_backends(config: &Config) -> StorageResult<Vec<Arc<dyn ChunkBackend>>> {
    let addresses = config.backend_addresses();
    if addresses.is_empty() {
        return Err(StorageError::ConfigError(
            "BACKEND_ADDRESSES not configured".to_string(),
        ));
    }

    match config.backend_kind() {
        #[cfg(feature = "backend-http")]
        BackendKind::Http => {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(config.backend_timeout_secs()))
                .build()
                .map_err(|e| {
                    StorageError::ConfigError(format!("Failed to create HTTP client: {}", e))
                })?;

            Ok(addresses
                .iter()
                .map(|addr| {
                    tracing::info!(backend = %addr, "Connecting to storage node");
                    Arc::new(HttpBackend::with_client(addr.clone(), client.clone()))
                        as Arc<dyn ChunkBackend>
                })
                .collect())
        }

        #[cfg(not(feature = "backend-http"))]
        BackendKind::Http => Err(StorageError::ConfigError(
            "HTTP backend not available (backend-http feature not enabled)".to_string(),
        )),

        #[cfg(feature = "backend-memory")]
        BackendKind::Memory => Ok(addresses
            .iter()
            .map(|addr| {
                tracing::info!(backend = %addr, "Using in-memory backend");
                Arc::new(MemoryBackend::new(addr.clone())) as Arc<dyn ChunkBackend>
            })
            .collect()),

        #[cfg(not(feature = "backend-memory"))]
        BackendKind::Memory => Err(StorageError::ConfigError(
            "Memory backend not available (backend-memory feature not enabled)".to_string(),
        )),
    }
}
