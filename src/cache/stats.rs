//! Cache Statistics Module
//!
//! Point-in-time snapshot of how many stored entries are still fresh.

use serde::Serialize;

// == Cache Stats ==
/// Counts of stored entries at the instant of a scan.
///
/// `total` includes stale entries that have not yet been lazily evicted, so
/// `total == valid + expired` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// All entries currently stored
    pub total: usize,
    /// Entries whose expiry is still in the future
    pub valid: usize,
    /// Entries past their expiry but not yet evicted
    pub expired: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Counts one scanned entry.
    pub fn record(&mut self, expired: bool) {
        self.total += 1;
        if expired {
            self.expired += 1;
        } else {
            self.valid += 1;
        }
    }

    /// Fraction of stored entries that are still valid, `1.0` when empty.
    pub fn freshness(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.valid as f64 / self.total as f64
        }
    }
}
