//! Timed Cache - an in-memory key/value cache with per-entry TTL
//!
//! A best-effort, short-lived memoization layer: repeated reads of the same
//! logical resource within a freshness window skip a redundant fetch, and no
//! caller ever observes a value older than the window it was stored with.
//! Expiry is evaluated lazily on read; invalidation is available per key, by
//! regex pattern over a key namespace, or in full.

pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod shared;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, TimedCache, DEFAULT_TTL_MS};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
pub use tasks::spawn_sweep_task;
