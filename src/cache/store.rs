//! Cache Store Module
//!
//! TTL-bounded key/value store with lazy eviction on read.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_MS};

// == Cache Store ==
/// In-memory store mapping string keys to values with per-entry expiry.
///
/// Expired entries stay physically stored until the next `get` on that key
/// (or a `delete`/`clear`); there is no background sweep.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_ms` - Lifetime in milliseconds (uses [`DEFAULT_TTL_MS`] if None)
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let key = key.into();
        let ttl_ms = ttl_ms.unwrap_or(DEFAULT_TTL_MS);
        debug!(key = %key, ttl_secs = ttl_ms / 1000, "cache set");
        self.entries.insert(key, CacheEntry::new(value, ttl_ms));
    }

    // == Has ==
    /// Returns true if `key` holds a readable value.
    ///
    /// Goes through `get`, so an expired entry is evicted here too.
    pub fn has(&mut self, key: &str) -> bool
    where
        V: Clone,
    {
        self.get(key).is_some()
    }

    // == Delete ==
    /// Removes `key` if present. Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            debug!(key = %key, "cache delete");
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        debug!(removed, "cache clear");
    }

    // == Stats ==
    /// Scans all stored entries without evicting anything.
    pub fn stats(&self) -> CacheStats {
        let now = current_timestamp_ms();
        let mut stats = CacheStats::new();
        for entry in self.entries.values() {
            stats.record(entry.is_expired_at(now));
        }
        stats
    }

    // == Keys ==
    /// Returns all stored keys, expired ones included, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    // == Length ==
    /// Returns the number of physically stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for unknown keys. An expired entry is removed and
    /// reported as `None`.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;

        if entry.is_expired() {
            self.entries.remove(key);
            debug!(key = %key, "cache entry expired");
            return None;
        }

        debug!(key = %key, "cache hit");
        Some(entry.value.clone())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.stats(), CacheStats::default());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("key1", "value1".to_string(), None);

        assert_eq!(store.get("key1").as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new();

        assert!(store.get("nonexistent").is_none());
        assert!(!store.has("nonexistent"));
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new();

        store.set("key1", 1u32, None);
        store.delete("key1");

        assert!(store.is_empty());
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_delete_nonexistent_is_noop() {
        let mut store = CacheStore::new();
        store.set("key1", 1u32, None);

        store.delete("nonexistent");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.set("key1", "value1", None);
        store.set("key1", "value2", None);

        assert_eq!(store.get("key1"), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_ttl() {
        let mut store = CacheStore::new();

        store.set("key1", "short", Some(30));
        store.set("key1", "long", Some(60_000));
        sleep(Duration::from_millis(60));

        assert_eq!(store.get("key1"), Some("long"));
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.set("key1", "value1", Some(50));
        assert!(store.has("key1"));

        sleep(Duration::from_millis(80));

        assert!(store.get("key1").is_none());
        assert!(store.is_empty(), "expired entry should be evicted by get");
    }

    #[test]
    fn test_has_evicts_expired_entry() {
        let mut store = CacheStore::new();

        store.set("key1", "value1", Some(20));
        sleep(Duration::from_millis(50));

        assert!(!store.has("key1"));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new();
        store.set("a", 1, None);
        store.set("b", 2, Some(10));

        store.clear();

        assert!(store.is_empty());
        assert_eq!(
            store.stats(),
            CacheStats {
                total: 0,
                valid: 0,
                expired: 0
            }
        );
    }

    #[test]
    fn test_stats_counts_expired_without_evicting() {
        let mut store = CacheStore::new();

        store.set("k1", "v1", Some(60_000));
        store.set("k2", "v2", Some(20));
        sleep(Duration::from_millis(50));

        let stats = store.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.valid, 1);
        assert_eq!(stats.expired, 1);

        // Scanning again must not have changed anything.
        assert_eq!(store.stats(), stats);
        assert_eq!(store.len(), 2);

        assert!(store.get("k2").is_none());
        let stats = store.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.valid, 1);
        assert_eq!(stats.expired, 0);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut store = CacheStore::new();
        store.set("vehicle_2", (), None);
        store.set("all_vehicles", (), None);
        store.set("vehicle_10", (), None);

        assert_eq!(store.keys(), vec!["all_vehicles", "vehicle_10", "vehicle_2"]);
    }
}
