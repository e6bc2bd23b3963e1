//! Distributor Services Layer
//!
//! This crate hosts the chunk distribution logic: splitting a file into one
//! part per backend, fanning the parts out concurrently, recording where each
//! part landed, and reading them back in order. Keep coordination here; keep
//! HTTP handling in distributor-api.

pub mod distributor;
pub mod download;
pub mod error;
pub mod registry;
pub mod splitter;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use distributor::ChunkDistributor;
pub use distributor_storage::{Chunk, ChunkBackend, StorageError, StorageResult};
pub use download::DownloadOrchestrator;
pub use error::DistributeError;
pub use registry::{ChunkRegistry, EntryState, RegistryEntry};
pub use splitter::split;
pub use upload::{checksum_hex, UploadOrchestrator};
