//! Domain models shared between the gateway and the service layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle naming one uploaded file's chunk set.
///
/// Minted fresh for every upload; never derived from content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new() -> Self {
        ResourceId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ResourceId {
    fn from(raw: String) -> Self {
        ResourceId(raw)
    }
}

impl From<&str> for ResourceId {
    fn from(raw: &str) -> Self {
        ResourceId(raw.to_string())
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where one chunk of a resource lives.
///
/// `order` is both the chunk's position in the reassembled file and the index
/// of the backend slot holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkLocation {
    pub resource_id: ResourceId,
    pub file_name: String,
    pub order: u32,
    /// Location string of the backend that accepted the chunk. Informational.
    pub backend_ref: String,
}

/// Returned to the caller after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub resource: ResourceId,
    /// Hex encoded SHA-256 of the whole, unsplit content
    pub checksum: String,
}

/// A reassembled file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub data: bytes::Bytes,
}
