//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry: an opaque value plus freshness metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Freshness window in milliseconds
    pub ttl_ms: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_ms` - Freshness window in milliseconds
    pub fn new(value: T, ttl_ms: u64) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its freshness window.
    ///
    /// Boundary condition: the comparison is a strict greater-than, so an
    /// entry is still valid at exactly `ttl_ms` elapsed and expires on the
    /// next millisecond.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Is Expired At ==
    /// Expiry predicate against an explicit timestamp.
    ///
    /// `saturating_sub` guards against a clock that moved backwards: a
    /// negative elapsed time reads as zero, which is never expired.
    ///
    /// # Returns
    /// - `true` if `now - stored_at > ttl_ms`
    /// - `false` otherwise, including at exactly `ttl_ms` elapsed
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at) > self.ttl_ms
    }

    // == Time To Live ==
    /// Returns the remaining freshness window in milliseconds.
    ///
    /// Returns 0 once the window has fully elapsed.
    pub fn ttl_remaining_ms(&self) -> u64 {
        (self.stored_at + self.ttl_ms).saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
