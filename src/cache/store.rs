//! Cache Store Module
//!
//! Main cache engine: a HashMap of entries with per-entry TTL expiration,
//! lazy (read-triggered) eviction, and pattern-based invalidation.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_MS};
use crate::error::Result;

// == Timed Cache ==
/// In-memory key/value store with per-entry expiration.
///
/// Each instance is homogeneous in its value type `T`, so reads are
/// statically typed. Expiry is evaluated lazily on read: an entry observed
/// expired by `get`/`has` is removed before the call returns, so the cache
/// never hands out a value older than its freshness window.
///
/// There is no capacity bound and no eviction of unexpired entries; the key
/// space is expected to be small and bounded by the caller's access
/// patterns. Memory held by expired-but-unread entries is reclaimed on the
/// next access to that key or by an explicit [`sweep_expired`] call.
///
/// [`sweep_expired`]: TimedCache::sweep_expired
#[derive(Debug)]
pub struct TimedCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in milliseconds applied when `set` is called without one
    default_ttl_ms: u64,
}

impl<T> TimedCache<T> {
    // == Constructor ==
    /// Creates a new TimedCache with the given default TTL.
    ///
    /// # Arguments
    /// * `default_ttl_ms` - TTL in milliseconds for entries stored without
    ///   an explicit one
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a value under a key with an optional TTL.
    ///
    /// If the key already exists the entry is replaced entirely
    /// (last-write-wins, no merge) and its timestamp is reset, so the
    /// effective expiry is governed by this call's TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl_ms` - Optional TTL in milliseconds (uses the default if None)
    pub fn set(&mut self, key: String, value: T, ttl_ms: Option<u64>) {
        let effective_ttl = ttl_ms.unwrap_or(self.default_ttl_ms);
        self.entries.insert(key, CacheEntry::new(value, effective_ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired. An entry observed
    /// expired is removed synchronously and counted as a miss, so a re-check
    /// at the same instant also observes absent.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        if !self.check_live(key) {
            return None;
        }

        let value = self.entries.get(key).map(|entry| entry.value.clone());
        self.stats.record_hit();
        value
    }

    // == Has ==
    /// Checks whether a key is present and not expired.
    ///
    /// Same expiry-aware semantics as [`get`], without returning the value:
    /// an entry observed expired is evicted and counted as a miss.
    ///
    /// [`get`]: TimedCache::get
    pub fn has(&mut self, key: &str) -> bool {
        if !self.check_live(key) {
            return false;
        }

        self.stats.record_hit();
        true
    }

    // == Invalidate ==
    /// Unconditionally removes the entry for a key, live or expired.
    ///
    /// No-op if the key is absent.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn invalidate(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.stats.record_invalidations(1);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Invalidate Pattern ==
    /// Removes every key matching a regular-expression pattern.
    ///
    /// Intended for bulk invalidation of a namespace of related keys
    /// (e.g. all entries prefixed `user_roadmaps_`). Non-matching keys are
    /// left untouched.
    ///
    /// # Arguments
    /// * `pattern` - Regular expression matched against each key
    ///
    /// # Returns
    /// The number of entries removed, or an error if the pattern is not a
    /// valid regular expression.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> Result<usize> {
        let regex = Regex::new(pattern)?;

        let matching_keys: Vec<String> = self
            .entries
            .keys()
            .filter(|key| regex.is_match(key))
            .cloned()
            .collect();

        let count = matching_keys.len();

        for key in matching_keys {
            self.entries.remove(&key);
        }

        if count > 0 {
            debug!("Pattern '{}' invalidated {} entries", pattern, count);
            self.stats.record_invalidations(count as u64);
            self.stats.set_total_entries(self.entries.len());
        }

        Ok(count)
    }

    // == Clear ==
    /// Removes all entries, for use at logout or full data-reset points.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.record_invalidations(count as u64);
        self.stats.set_total_entries(0);
    }

    // == Sweep Expired ==
    /// Removes all currently expired entries.
    ///
    /// Lazy eviction already guarantees freshness on reads; sweeping only
    /// reclaims memory held by expired entries whose keys are never read
    /// again. Removals are counted as expirations, not misses.
    ///
    /// # Returns
    /// The number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Default TTL ==
    /// Returns the TTL applied when `set` is called without one.
    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }

    // == Length ==
    /// Returns the current number of entries, including expired entries
    /// whose expiry has not yet been observed by a read or sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Check Live ==
    /// Shared lookup path for `get` and `has`: evicts on observed expiry
    /// and records the miss. Returns whether a live entry remains.
    fn check_live(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                debug!("Evicted expired entry for key '{}'", key);
                false
            }
            Some(_) => true,
            None => {
                self.stats.record_miss();
                false
            }
        }
    }
}

impl<T> Default for TimedCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}
