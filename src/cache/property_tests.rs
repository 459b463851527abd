//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the TTL store against generated keys, values and
//! TTLs. Time is driven by a `ManualClock`, so no test sleeps.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{ManualClock, TtlCache, DEFAULT_TTL};

// == Strategies ==
/// Generates cache keys shaped like API URLs
fn url_key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,24}".prop_map(|s| format!("https://pokeapi.co/api/v2/{}", s))
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,128}"
}

/// TTLs between one millisecond and one hour
fn ttl_strategy() -> impl Strategy<Value = Duration> {
    (1u64..3_600_000).prop_map(Duration::from_millis)
}

fn fresh_store() -> (TtlCache<String>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    (TtlCache::with_clock(DEFAULT_TTL, clock.clone()), clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Immediately after set(key, value, ttl), get returns value and has is true.
    #[test]
    fn prop_set_then_get(
        key in url_key_strategy(),
        value in value_strategy(),
        ttl in ttl_strategy()
    ) {
        let (mut store, _) = fresh_store();

        store.set(key.clone(), value.clone(), Some(ttl));

        prop_assert_eq!(store.get(&key), Some(value));
        prop_assert!(store.has(&key));
    }

    // Once ttl has elapsed, get misses and the entry is gone for has as well.
    #[test]
    fn prop_expired_entry_is_evicted(
        key in url_key_strategy(),
        value in value_strategy(),
        ttl in ttl_strategy(),
        overshoot in 1u64..10_000
    ) {
        let (mut store, clock) = fresh_store();

        store.set(key.clone(), value, Some(ttl));
        clock.advance(ttl + Duration::from_millis(overshoot));

        prop_assert!(store.get(&key).is_none(), "Entry should miss after TTL");
        prop_assert!(!store.has(&key), "Entry should be evicted after TTL");
        prop_assert_eq!(store.len(), 0);
    }

    // cleanup() removes exactly the entries whose own ttl has elapsed.
    #[test]
    fn prop_cleanup_removes_only_expired(
        entries in prop::collection::vec(
            (url_key_strategy(), ttl_strategy(), 0u64..3_600_000),
            1..40
        ),
        elapsed_after in 0u64..3_600_000
    ) {
        let (mut store, clock) = fresh_store();

        // Entries are written at staggered times: each tuple carries a delay
        // applied before its write.
        let mut written: HashMap<String, (u64, Duration)> = HashMap::new();
        let mut offset = 0u64;
        for (key, ttl, delay) in entries {
            let delay = delay / 40;
            clock.advance(Duration::from_millis(delay));
            offset += delay;
            store.set(key.clone(), format!("value_{}", key), Some(ttl));
            written.insert(key, (offset, ttl));
        }
        clock.advance(Duration::from_millis(elapsed_after));
        let now = offset + elapsed_after;

        let expected_expired = written
            .values()
            .filter(|(stored_at, ttl)| now - stored_at > ttl.as_millis() as u64)
            .count();

        let removed = store.cleanup();
        prop_assert_eq!(removed, expected_expired);

        for (key, (stored_at, ttl)) in &written {
            let valid = now - stored_at <= ttl.as_millis() as u64;
            prop_assert_eq!(store.has(key), valid, "Wrong survival for {}", key);
        }
    }

    // Overwriting a key keeps a single entry holding the latest value.
    #[test]
    fn prop_overwrite_semantics(
        key in url_key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let (mut store, _) = fresh_store();

        store.set(key.clone(), value1, None);
        store.set(key.clone(), value2.clone(), None);

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Hit and miss counters track every get.
    #[test]
    fn prop_statistics_accuracy(
        keys in prop::collection::vec(url_key_strategy(), 1..20),
        probes in prop::collection::vec(url_key_strategy(), 1..40)
    ) {
        let (mut store, _) = fresh_store();
        for key in &keys {
            store.set(key.clone(), "v".to_string(), None);
        }

        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;
        for probe in &probes {
            if keys.contains(probe) {
                expected_hits += 1;
            } else {
                expected_misses += 1;
            }
            store.get(probe);
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.size, store.len());
    }
}
