//! Background Tasks Module
//!
//! Contains the optional periodic sweep task. Off by default: lazy
//! eviction alone satisfies the freshness guarantee, the sweep only
//! reclaims memory held by expired entries whose keys are never re-read.

mod sweep;

pub use sweep::spawn_sweep_task;
