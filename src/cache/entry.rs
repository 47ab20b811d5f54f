//! Cache Entry Module
//!
//! Defines a single stored value together with its absolute expiry time.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored payload and the instant after which it is no longer readable.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl_ms` milliseconds from now.
    pub fn new(value: V, ttl_ms: u64) -> Self {
        Self {
            value,
            expires_at: current_timestamp_ms().saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    /// Checks expiry against a caller-supplied timestamp.
    ///
    /// An entry is readable only while `now < expires_at`; reaching the
    /// expiry timestamp exactly already counts as expired.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as `0`.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
