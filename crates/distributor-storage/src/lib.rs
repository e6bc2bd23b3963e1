//! Distributor Storage Library
//!
//! This crate provides the backend client abstraction the gateway writes
//! chunks through, and its two implementations: a network client speaking the
//! storage node protocol and an in-memory store.
//!
//! # Chunk key format
//!
//! A backend stores chunks under the resource identifier alone, not under
//! resource + order. A backend slot therefore holds at most one chunk per
//! resource, which matches the one-chunk-per-backend assignment made by the
//! upload orchestrator.

pub mod factory;
#[cfg(feature = "backend-http")]
pub mod http;
#[cfg(feature = "backend-memory")]
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use distributor_core::BackendKind;
pub use factory::create_backends;
#[cfg(feature = "backend-http")]
pub use http::HttpBackend;
#[cfg(feature = "backend-memory")]
pub use memory::MemoryBackend;
pub use traits::{Chunk, ChunkBackend, StorageError, StorageResult};

/// Query parameter and header names of the storage node protocol.
pub mod protocol {
    pub const SAVE_CHUNK_PATH: &str = "/save-chunk";
    pub const GET_CHUNK_PATH: &str = "/get-chunk";
    pub const ORDER_HEADER: &str = "x-chunk-order";
}
