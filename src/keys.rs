//! Cache Key Namespaces
//!
//! Well-known key builders, invalidation patterns, and freshness windows
//! for the dashboard data the consuming application caches. Keeping them
//! in one place keeps `set`/`invalidate_pattern` call sites in agreement
//! about key shapes.

// == Shared Keys ==
/// Key for the public roadmap listing shared by all users
pub const PUBLIC_ROADMAPS: &str = "public_roadmaps";

/// Key for the pre-fetched question bank
pub const CACHED_QUESTIONS: &str = "cached_questions";

// == Per-User Key Builders ==
/// Key for a user's roadmap list.
pub fn user_roadmaps(user_id: &str) -> String {
    format!("user_roadmaps_{}", user_id)
}

/// Key for a user's progress data.
pub fn user_progress(user_id: &str) -> String {
    format!("user_progress_{}", user_id)
}

/// Key for a user's basic profile data.
pub fn user_basic_data(user_id: &str) -> String {
    format!("user_basic_data_{}", user_id)
}

// == Invalidation Patterns ==
/// Matches every user's roadmap list
pub const USER_ROADMAPS_PATTERN: &str = "^user_roadmaps_";

/// Matches every user's progress data
pub const USER_PROGRESS_PATTERN: &str = "^user_progress_";

/// Matches every user's basic profile data
pub const USER_BASIC_DATA_PATTERN: &str = "^user_basic_data_";

// == Freshness Windows (milliseconds) ==
/// Roadmap lists: 5 minutes
pub const ROADMAPS_TTL_MS: u64 = 5 * 60 * 1000;

/// Progress data updates more often: 2 minutes
pub const PROGRESS_TTL_MS: u64 = 2 * 60 * 1000;

/// Basic profile data rarely changes: 10 minutes
pub const USER_DATA_TTL_MS: u64 = 10 * 60 * 1000;
