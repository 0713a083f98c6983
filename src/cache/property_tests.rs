//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache's behavioral guarantees across
//! arbitrary keys, values, and operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::TimedCache;

// == Test Configuration ==
const TEST_DEFAULT_TTL_MS: u64 = 300_000;

// == Strategies ==
/// Generates valid cache keys (non-empty, word characters only)
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Has { key: String },
    Invalidate { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Has { key }),
        key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back within the freshness window
    // returns exactly the value that was stored.
    #[test]
    fn prop_fresh_read_returns_stored_value(key in key_strategy(), value in value_strategy()) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Writing twice under the same key leaves exactly one entry holding
    // the second value.
    #[test]
    fn prop_last_write_wins(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value1, None);
        cache.set(key.clone(), value2.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // Invalidation removes the entry regardless of remaining TTL.
    #[test]
    fn prop_invalidate_is_unconditional(
        key in key_strategy(),
        value in value_strategy(),
        ttl_ms in 1u64..86_400_000
    ) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value, Some(ttl_ms));
        cache.invalidate(&key);

        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(cache.is_empty());
    }

    // Pattern invalidation removes exactly the matching namespace and
    // leaves every other key untouched.
    #[test]
    fn prop_pattern_invalidation_scope(
        suffixes in prop::collection::hash_set("[a-z0-9]{1,16}", 1..10),
        others in prop::collection::hash_set("[a-z0-9]{1,16}", 1..10)
    ) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);

        for suffix in &suffixes {
            cache.set(format!("user_roadmaps_{}", suffix), "v".to_string(), None);
        }
        for other in &others {
            cache.set(format!("public_{}", other), "v".to_string(), None);
        }

        let removed = cache.invalidate_pattern("^user_roadmaps_").unwrap();
        prop_assert_eq!(removed, suffixes.len());

        for suffix in &suffixes {
            let key = format!("user_roadmaps_{}", suffix);
            prop_assert!(!cache.has(&key));
        }
        for other in &others {
            let key = format!("public_{}", other);
            prop_assert!(cache.has(&key));
        }
    }

    // After clear(), every previously present key reads as absent.
    #[test]
    fn prop_clear_totality(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..30)
    ) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);

        for (key, value) in &entries {
            cache.set(key.clone(), value.clone(), None);
        }

        cache.clear();

        prop_assert!(cache.is_empty());
        for (key, _) in &entries {
            prop_assert_eq!(cache.get(key), None);
        }
    }

    // Hit/miss/invalidation counters track an exact model of the
    // operation sequence (no expiry occurs within the default TTL).
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);
        let mut present: HashSet<String> = HashSet::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;
        let mut expected_invalidations: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value, None);
                    present.insert(key);
                }
                CacheOp::Get { key } => {
                    if present.contains(&key) {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    let _ = cache.get(&key);
                }
                CacheOp::Has { key } => {
                    if present.contains(&key) {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    let _ = cache.has(&key);
                }
                CacheOp::Invalidate { key } => {
                    if present.remove(&key) {
                        expected_invalidations += 1;
                    }
                    cache.invalidate(&key);
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.invalidations, expected_invalidations, "Invalidations mismatch");
        prop_assert_eq!(stats.total_entries, present.len(), "Total entries mismatch");
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Once the freshness window has elapsed, the entry reads as absent,
    // and re-checking never revives it.
    #[test]
    fn prop_expiry_is_observed_and_idempotent(
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut cache = TimedCache::new(TEST_DEFAULT_TTL_MS);

        cache.set(key.clone(), value.clone(), Some(40));
        prop_assert_eq!(cache.get(&key), Some(value), "Entry should be readable before expiry");

        sleep(Duration::from_millis(120));

        prop_assert_eq!(cache.get(&key), None, "Entry should be absent after expiry");
        prop_assert!(cache.is_empty(), "Observed expiry should evict the entry");
        prop_assert_eq!(cache.get(&key), None, "Re-checking must not revive the entry");
    }
}
