//! Fixed-memory, expiration-aware key/value cache.
//!
//! The cache is never consulted for correctness: a miss is always resolvable
//! by calling through to the next layer, and every failure path inside the
//! cache degrades to a miss. No entry is ever returned after its declared
//! expiration, even under capacity pressure.

use crate::CacheKey;

use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::sync::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone)]
struct CacheValue {
    data: Arc<[u8]>,
    ttl: Duration,
}

/// Reads each entry's TTL off the stored value.
struct PerEntryExpiry;

impl Expiry<CacheKey, CacheValue> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &CacheKey,
        value: &CacheValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Concurrent cache bounded by resident value bytes.
///
/// Eviction under capacity pressure is the cache's own policy; expiration is
/// a hard guarantee. Internal synchronization makes it safe to share behind
/// an `Arc` across any number of concurrent calls.
#[derive(Clone)]
pub struct BoundedCache {
    inner: Cache<CacheKey, CacheValue>,
}

impl BoundedCache {
    /// Create a cache holding at most `max_capacity_bytes` of value data.
    pub fn new(max_capacity_bytes: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity_bytes)
            .weigher(|_key: &CacheKey, value: &CacheValue| {
                value.data.len().min(u32::MAX as usize) as u32
            })
            .expire_after(PerEntryExpiry)
            .build();
        Self { inner }
    }

    /// Typed view over one key.
    pub fn entry(&self, key: CacheKey) -> Entry<'_> {
        Entry { cache: self, key }
    }

    pub fn get_bytes(&self, key: &CacheKey) -> Option<Arc<[u8]>> {
        self.inner.get(key).map(|v| v.data)
    }

    pub fn set_bytes(&self, key: CacheKey, data: Vec<u8>, ttl: Duration) {
        self.inner.insert(
            key,
            CacheValue {
                data: data.into(),
                ttl,
            },
        );
    }

    /// Drop one entry immediately, regardless of its remaining TTL.
    pub fn invalidate(&self, key: &CacheKey) {
        self.inner.invalidate(key);
    }

    /// Approximate number of resident entries (diagnostics only).
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

/// One key's typed get/set surface.
pub struct Entry<'a> {
    cache: &'a BoundedCache,
    key: CacheKey,
}

impl Entry<'_> {
    /// Fetch and decode the entry. Decode failures are logged and treated
    /// as a miss so a stale or corrupt entry can never poison a call.
    pub fn get<T: DeserializeOwned>(&self) -> Option<T> {
        let bytes = match self.cache.get_bytes(&self.key) {
            Some(bytes) => bytes,
            None => {
                log::debug!("cache miss");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                log::debug!("cache hit");
                Some(value)
            }
            Err(e) => {
                log::error!("cache: unable to decode: {}", e);
                None
            }
        }
    }

    /// Encode and store the entry with the given expiration. Failures are
    /// logged and swallowed; the caller's result is never affected.
    pub fn set<T: Serialize>(&self, ttl: Duration, value: &T) {
        match serde_json::to_vec(value) {
            Ok(data) => self.cache.set_bytes(self.key, data, ttl),
            Err(e) => log::error!("cache: unable to encode value: {}", e),
        }
    }

    /// Drop the entry immediately.
    pub fn invalidate(&self) {
        self.cache.invalidate(&self.key);
    }
}
