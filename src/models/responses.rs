//! Response DTOs for the cache administration endpoints
//!
//! Data endpoints return the marketplace records directly.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for GET /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// All stored entries, stale ones included
    pub total: usize,
    /// Entries still fresh
    pub valid: usize,
    /// Entries past expiry, awaiting lazy eviction
    pub expired: usize,
    /// valid / total
    pub freshness: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            total: stats.total,
            valid: stats.valid,
            expired: stats.expired,
            freshness: stats.freshness(),
        }
    }
}

/// Response body for the DELETE /cache endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Keys that were targeted; empty when the whole cache was cleared
    pub keys: Vec<String>,
}

impl ClearResponse {
    pub fn all() -> Self {
        Self {
            message: "All cache cleared".to_string(),
            keys: Vec::new(),
        }
    }

    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        Self {
            message: format!("Cleared {}", keys.join(", ")),
            keys,
        }
    }
}

/// Response body for GET /cache/keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    pub count: usize,
    pub keys: Vec<String>,
}

impl KeysResponse {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            count: keys.len(),
            keys,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
