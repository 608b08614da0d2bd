//! Cache key derivation.
//!
//! Keys are a SHA-256 digest over an entry tag (usually the call site's
//! operation name) followed by ordered key parts, so that distinct requests
//! can never collide by accident and raw request data never sits in memory
//! as a key.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Fixed-size digest key used by the bounded cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Builder chaining key parts into a digest.
pub struct KeyBuilder {
    hasher: Sha256,
}

impl KeyBuilder {
    /// Start a key for the given entry tag.
    pub fn new(tag: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(tag.as_bytes());
        Self { hasher }
    }

    pub fn with_str(mut self, v: &str) -> Self {
        // Length prefix keeps ("ab","c") distinct from ("a","bc").
        self.hasher.update((v.len() as u64).to_be_bytes());
        self.hasher.update(v.as_bytes());
        self
    }

    pub fn with_u64(mut self, v: u64) -> Self {
        self.hasher.update(v.to_be_bytes());
        self
    }

    /// Add a list of strings, sorted lexicographically, so that callers
    /// passing the same set in a different order produce the same key.
    pub fn with_strings(mut self, values: &[String]) -> Self {
        let mut sorted: Vec<&String> = values.iter().collect();
        sorted.sort();
        for v in sorted {
            self.hasher.update((v.len() as u64).to_be_bytes());
            self.hasher.update(v.as_bytes());
        }
        self
    }

    /// Add any serializable value.
    ///
    /// Serialization failures are logged and skipped; request types used as
    /// key parts are plain data and serialize infallibly in practice.
    pub fn with_value<T: Serialize>(mut self, v: &T) -> Self {
        match serde_json::to_vec(v) {
            Ok(bytes) => {
                self.hasher.update((bytes.len() as u64).to_be_bytes());
                self.hasher.update(&bytes);
            }
            Err(e) => log::error!("cache: unable to encode key part: {}", e),
        }
        self
    }

    pub fn build(self) -> CacheKey {
        CacheKey(self.hasher.finalize().into())
    }
}
