//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL expiration, lazy eviction,
//! and pattern-based invalidation.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TimedCache;

// == Public Constants ==
/// Default freshness window: 5 minutes
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;
