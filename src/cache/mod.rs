//! Cache Module
//!
//! In-memory caching with per-entry TTL expiry, plus the named TTL classes
//! and key names used by the data-access layer.

mod entry;
pub mod keys;
mod stats;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use ttl::{DataCategory, TtlClass, DEFAULT_TTL_MS};
