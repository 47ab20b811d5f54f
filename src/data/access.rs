//! Read-through data access
//!
//! Every read checks the cache first and only reaches the [`VehicleSource`]
//! on a miss. Successful fetches are cached with their category's TTL;
//! failures are returned unchanged and never cached.
//!
//! The store lock is released before a fetch is awaited, so two concurrent
//! misses on the same key both fetch and the later write wins.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{keys, CacheStats, CacheStore, DataCategory};
use crate::config::Config;
use crate::data::{
    HttpVehicleSource, MockVehicleSource, Profile, UserCarListing, Vehicle, VehicleSource,
};
use crate::error::{ApiError, Result};

/// Shared cache of JSON payloads keyed by [`keys`].
pub type SharedCache = Arc<RwLock<CacheStore<Value>>>;

/// Cache-backed access to marketplace data.
///
/// Cloning is cheap; clones share the same cache and source.
#[derive(Clone)]
pub struct DataAccess {
    cache: SharedCache,
    source: Arc<dyn VehicleSource>,
}

impl DataAccess {
    /// Creates an access layer with an empty cache.
    pub fn new(source: Arc<dyn VehicleSource>) -> Self {
        Self::with_cache(Arc::new(RwLock::new(CacheStore::new())), source)
    }

    pub fn with_cache(cache: SharedCache, source: Arc<dyn VehicleSource>) -> Self {
        Self { cache, source }
    }

    /// Picks the mock dataset or the remote API based on `config`.
    pub fn from_config(config: &Config) -> Self {
        let source: Arc<dyn VehicleSource> = if config.use_mock_data {
            Arc::new(MockVehicleSource::new(Duration::from_millis(
                config.mock_latency_ms,
            )))
        } else {
            Arc::new(HttpVehicleSource::from_config(config))
        };
        Self::new(source)
    }

    /// The underlying store, for callers that need direct access.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Data Reads ==

    pub async fn get_all_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.read_through(keys::ALL_VEHICLES, DataCategory::AllVehicles, || {
            self.source.fetch_vehicles()
        })
        .await
    }

    pub async fn get_new_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.read_through(keys::NEW_VEHICLES, DataCategory::NewVehicles, || {
            self.source.fetch_new_vehicles()
        })
        .await
    }

    /// Looks up one vehicle, caching it under its own key.
    ///
    /// On a miss the (possibly cached) full collection is searched. An id
    /// absent from the collection is [`ApiError::NotFound`] and nothing is
    /// cached for it.
    pub async fn get_vehicle_by_id(&self, id: &str) -> Result<Vehicle> {
        let key = keys::vehicle_key(id);
        if let Some(vehicle) = self.cached(&key).await {
            return Ok(vehicle);
        }

        let vehicle = self
            .get_all_vehicles()
            .await?
            .into_iter()
            .find(|v| v.id().as_deref() == Some(id))
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

        self.store(&key, &vehicle, DataCategory::Vehicle).await;
        Ok(vehicle)
    }

    pub async fn get_user_profile(&self) -> Result<Profile> {
        self.read_through(keys::USER_PROFILE, DataCategory::UserProfile, || {
            self.source.fetch_user_profile()
        })
        .await
    }

    pub async fn get_user_cars(&self) -> Result<Vec<UserCarListing>> {
        self.read_through(keys::USER_CARS, DataCategory::UserCars, || {
            self.source.fetch_user_cars()
        })
        .await
    }

    // == Administration ==

    pub async fn clear_all_cache(&self) {
        self.cache.write().await.clear();
        info!("cache cleared");
    }

    /// Drops one key; unknown keys are ignored.
    pub async fn clear_cache_entry(&self, key: &str) {
        self.cache.write().await.delete(key);
        info!(key = %key, "cache entry cleared");
    }

    pub async fn get_cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Drops both vehicle list keys. Per-vehicle entries are kept.
    pub async fn clear_vehicle_cache(&self) {
        self.clear_keys(&keys::VEHICLE_LIST_KEYS).await;
    }

    /// Drops the profile and the user's listings.
    pub async fn clear_profile_cache(&self) {
        self.clear_keys(&keys::PROFILE_KEYS).await;
    }

    /// All stored keys, including expired ones not yet evicted.
    pub async fn cached_keys(&self) -> Vec<String> {
        self.cache.read().await.keys()
    }

    async fn clear_keys(&self, keys: &[&str]) {
        let mut cache = self.cache.write().await;
        for key in keys {
            cache.delete(key);
        }
        info!(keys = ?keys, "cache entries cleared");
    }

    // == Read-Through Helpers ==

    async fn read_through<T, F, Fut>(&self, key: &str, category: DataCategory, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(hit) = self.cached(key).await {
            return Ok(hit);
        }

        debug!(key = %key, "cache miss, fetching");
        let fresh = fetch().await.inspect_err(|err| {
            warn!(key = %key, error = %err, "fetch failed");
        })?;

        self.store(key, &fresh, category).await;
        Ok(fresh)
    }

    /// Reads and decodes a cached payload.
    ///
    /// A payload that no longer decodes as `T` is dropped and reported as a miss.
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.cache.write().await.get(key)?;

        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(key = %key, error = %err, "dropping undecodable cache entry");
                self.cache.write().await.delete(key);
                None
            }
        }
    }

    async fn store<T: Serialize>(&self, key: &str, value: &T, category: DataCategory) {
        match serde_json::to_value(value) {
            Ok(json) => self
                .cache
                .write()
                .await
                .set(key, json, Some(category.ttl_ms())),
            Err(err) => warn!(key = %key, error = %err, "not caching unserializable value"),
        }
    }
}
