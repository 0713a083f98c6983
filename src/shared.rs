//! Shared Cache Handle
//!
//! A cloneable, thread-safe handle to a single cache instance.
//!
//! Components that need one cache without a global singleton each hold a
//! clone of the handle; tests construct a fresh instance per case. All
//! methods take `&self` and lock internally, so callers never coordinate
//! beyond last-write-wins on racing `set`s.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, TimedCache};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Thread-safe wrapper around a [`TimedCache`].
///
/// Mirrors the synchronous cache operations as async methods. Lookup
/// operations acquire the write lock because observing an expired entry
/// evicts it and updates statistics.
pub struct SharedCache<T> {
    inner: Arc<RwLock<TimedCache<T>>>,
}

impl<T> Clone for SharedCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedCache<T> {
    // == Constructors ==
    /// Wraps an existing cache in a shared handle.
    pub fn new(cache: TimedCache<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a shared cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(TimedCache::new(config.default_ttl_ms))
    }

    // == Operations ==
    /// Stores a value under a key with an optional TTL in milliseconds.
    pub async fn set(&self, key: String, value: T, ttl_ms: Option<u64>) {
        let mut cache = self.inner.write().await;
        cache.set(key, value, ttl_ms);
    }

    /// Retrieves a value by key, evicting it if observed expired.
    pub async fn get(&self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        let mut cache = self.inner.write().await;
        cache.get(key)
    }

    /// Checks whether a key is present and not expired.
    pub async fn has(&self, key: &str) -> bool {
        let mut cache = self.inner.write().await;
        cache.has(key)
    }

    /// Unconditionally removes the entry for a key.
    pub async fn invalidate(&self, key: &str) {
        let mut cache = self.inner.write().await;
        cache.invalidate(key);
    }

    /// Removes every key matching a regular-expression pattern.
    pub async fn invalidate_pattern(&self, pattern: &str) -> Result<usize> {
        let mut cache = self.inner.write().await;
        cache.invalidate_pattern(pattern)
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        let mut cache = self.inner.write().await;
        cache.clear();
    }

    /// Removes all currently expired entries, returning the count.
    pub async fn sweep_expired(&self) -> usize {
        let mut cache = self.inner.write().await;
        cache.sweep_expired()
    }

    // == Introspection ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let cache = self.inner.read().await;
        cache.stats()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        let cache = self.inner.read().await;
        cache.len()
    }

    /// Returns true if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        let cache = self.inner.read().await;
        cache.is_empty()
    }
}
