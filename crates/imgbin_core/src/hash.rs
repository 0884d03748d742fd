//! Content id computation.

use base64::{Engine, engine::general_purpose::URL_SAFE};
use sha2::{Digest, Sha256};

/// Compute the content id for a byte sequence.
///
/// SHA-256 digest, URL-safe base64 encoded so the id can appear directly in a
/// retrieval path. Identical bytes always produce the identical id; this is
/// the sole deduplication mechanism. Total over all inputs, including empty.
pub fn content_id(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    URL_SAFE.encode(hasher.finalize())
}
