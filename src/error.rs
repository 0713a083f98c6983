//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! The cache has no I/O and almost no failure modes: the one user-input
//! error is a malformed regular expression passed to pattern invalidation,
//! which surfaces to the caller rather than being swallowed.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Malformed regular expression passed to pattern invalidation
    #[error("Invalid invalidation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
