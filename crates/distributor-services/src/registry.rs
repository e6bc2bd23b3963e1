//! In-memory directory of where every resource's chunks live.
//!
//! One process-wide lock guards the whole map. Every operation takes it,
//! mutates or copies, and releases it before returning, so concurrent appends
//! for the same resource never lose records. Entries live for the lifetime of
//! the process.

use distributor_core::{ChunkLocation, ResourceId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Lifecycle of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Upload in flight; records may still be arriving
    Pending,
    /// Every chunk was acknowledged by its backend
    Committed,
    /// A chunk write failed. Records of chunks that did land stay in place.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub state: EntryState,
    /// Kept sorted by `order`
    pub records: Vec<ChunkLocation>,
}

impl RegistryEntry {
    fn pending(capacity: usize) -> Self {
        RegistryEntry {
            state: EntryState::Pending,
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn is_committed(&self) -> bool {
        self.state == EntryState::Committed
    }
}

#[derive(Clone, Default)]
pub struct ChunkRegistry {
    inner: Arc<Mutex<HashMap<ResourceId, RegistryEntry>>>,
}

impl ChunkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish an empty, pending entry before any chunk write starts.
    pub async fn create_empty(&self, resource_id: ResourceId, expected_chunks: usize) {
        self.inner
            .lock()
            .await
            .insert(resource_id, RegistryEntry::pending(expected_chunks));
    }

    /// Record one stored chunk.
    ///
    /// The record is inserted at its `order` position; a record with the same
    /// order replaces the previous one.
    pub async fn append(&self, resource_id: &ResourceId, location: ChunkLocation) {
        let mut map = self.inner.lock().await;
        let entry = map
            .entry(resource_id.clone())
            .or_insert_with(|| RegistryEntry::pending(1));

        match entry
            .records
            .binary_search_by_key(&location.order, |r| r.order)
        {
            Ok(pos) => entry.records[pos] = location,
            Err(pos) => entry.records.insert(pos, location),
        }
    }

    /// Snapshot of the entry, if one exists.
    pub async fn get(&self, resource_id: &ResourceId) -> Option<RegistryEntry> {
        self.inner.lock().await.get(resource_id).cloned()
    }

    /// Flip a pending entry to committed. Returns false if there is no entry.
    pub async fn commit(&self, resource_id: &ResourceId) -> bool {
        self.set_state(resource_id, EntryState::Committed).await
    }

    pub async fn mark_failed(&self, resource_id: &ResourceId) -> bool {
        self.set_state(resource_id, EntryState::Failed).await
    }

    async fn set_state(&self, resource_id: &ResourceId, state: EntryState) -> bool {
        match self.inner.lock().await.get_mut(resource_id) {
            Some(entry) => {
                entry.state = state;
                true
            }
            None => false,
        }
    }

    /// Number of resources known, in any state
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    #[cfg(test)]
    pub(crate) async fn snapshot(&self) -> Vec<RegistryEntry> {
        self.inner.lock().await.values().cloned().collect()
    }
}
