//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain `HashMap` model and to
//! verify the stats and expiry invariants.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{CacheStats, CacheStore};

// Long enough that nothing expires during a test case.
const LONG_TTL_MS: u64 = 60 * 60 * 1000;

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}[0-9]{0,3}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of operations on unexpired data behaves like a HashMap.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key.clone(), value.clone(), Some(LONG_TTL_MS));
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(store.has(&key), model.contains_key(&key));
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                    model.remove(&key);
                }
                CacheOp::Clear => {
                    store.clear();
                    model.clear();
                }
            }

            let stats = store.stats();
            prop_assert_eq!(stats.total, model.len());
            prop_assert_eq!(stats.valid, model.len());
            prop_assert_eq!(stats.expired, 0);
        }
    }

    #[test]
    fn prop_set_then_get_returns_value(
        key in key_strategy(),
        value in value_strategy(),
        ttl in 1_000u64..LONG_TTL_MS
    ) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value.clone(), Some(ttl));

        prop_assert_eq!(store.get(&key), Some(value));
        prop_assert!(store.has(&key));
    }

    #[test]
    fn prop_default_ttl_is_readable(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();

        store.set(key.clone(), value.clone(), None);

        prop_assert_eq!(store.get(&key), Some(value));
    }

    #[test]
    fn prop_unknown_key_is_absent(key in key_strategy(), other in key_strategy()) {
        prop_assume!(key != other);
        let mut store = CacheStore::new();
        store.set(other, "x".to_string(), None);

        prop_assert_eq!(store.get(&key), None);
        store.delete(&key);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn prop_last_write_wins(
        key in key_strategy(),
        values in prop::collection::vec(value_strategy(), 1..10)
    ) {
        let mut store = CacheStore::new();
        for value in &values {
            store.set(key.clone(), value.clone(), None);
        }

        prop_assert_eq!(store.get(&key), values.last().cloned());
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn prop_clear_empties_stats(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..30)
    ) {
        let mut store = CacheStore::new();
        for (key, value) in entries {
            store.set(key, value, None);
        }

        store.clear();

        prop_assert_eq!(store.stats(), CacheStats { total: 0, valid: 0, expired: 0 });
    }
}

// Fewer cases for tests that sleep.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    #[test]
    fn prop_expired_entries_are_absent(
        keys in prop::collection::hash_set(key_strategy(), 1..8),
        fresh in prop::collection::hash_set(key_strategy(), 0..8)
    ) {
        let fresh: Vec<String> = fresh.difference(&keys).cloned().collect();
        let mut store = CacheStore::new();
        for key in &keys {
            store.set(key.clone(), key.clone(), Some(20));
        }
        for key in &fresh {
            store.set(key.clone(), key.clone(), Some(LONG_TTL_MS));
        }

        sleep(Duration::from_millis(50));

        let stats = store.stats();
        prop_assert_eq!(stats.total, keys.len() + fresh.len());
        prop_assert_eq!(stats.expired, keys.len());
        prop_assert_eq!(stats.valid, fresh.len());

        for key in &keys {
            prop_assert_eq!(store.get(key), None);
        }
        for key in &fresh {
            prop_assert_eq!(store.get(key), Some(key.clone()));
        }

        let stats = store.stats();
        prop_assert_eq!(stats.total, fresh.len());
        prop_assert_eq!(stats.expired, 0);
    }
}

// Shared access the way the data-access layer holds the store.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_shared_store_stays_consistent(
        operations in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        use std::sync::Arc;
        use tokio::sync::RwLock;

        tokio_test::block_on(async {
            let store = Arc::new(RwLock::new(CacheStore::<String>::new()));
            let mut handles = vec![];

            for op in operations {
                let store = Arc::clone(&store);
                handles.push(tokio::spawn(async move {
                    let mut cache = store.write().await;
                    match op {
                        CacheOp::Set { key, value } => cache.set(key, value, Some(LONG_TTL_MS)),
                        CacheOp::Get { key } => {
                            let _ = cache.get(&key);
                        }
                        CacheOp::Has { key } => {
                            let _ = cache.has(&key);
                        }
                        CacheOp::Delete { key } => cache.delete(&key),
                        CacheOp::Clear => cache.clear(),
                    }
                }));
            }

            for handle in handles {
                handle.await.expect("task should not panic");
            }

            let cache = store.read().await;
            let stats = cache.stats();
            prop_assert_eq!(stats.total, cache.len());
            prop_assert_eq!(stats.total, stats.valid + stats.expired);
            Ok(())
        })?;
    }
}
