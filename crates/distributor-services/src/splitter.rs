//! Backend-count driven file splitting.

use bytes::Bytes;
use std::num::NonZeroUsize;

/// Partition `data` into exactly `parts` contiguous, non-overlapping slices.
///
/// Every part but the last holds `len / parts` bytes; the last one absorbs the
/// remainder. When `len < parts` the leading parts are empty. Slices share the
/// input buffer, nothing is copied.
pub fn split(data: &Bytes, parts: NonZeroUsize) -> Vec<Bytes> {
    let parts = parts.get();
    let part_size = data.len() / parts;

    (0..parts)
        .map(|i| {
            let start = i * part_size;
            if i == parts - 1 {
                data.slice(start..)
            } else {
                data.slice(start..start + part_size)
            }
        })
        .collect()
}
