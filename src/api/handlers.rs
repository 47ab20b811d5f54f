//! API Handlers
//!
//! HTTP request handlers for the marketplace data and cache administration
//! endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::keys;
use crate::config::Config;
use crate::data::{DataAccess, Profile, UserCarListing, Vehicle};
use crate::error::Result;
use crate::models::{ClearResponse, HealthResponse, KeysResponse, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-backed data access, shared by every request
    pub data: DataAccess,
}

impl AppState {
    pub fn new(data: DataAccess) -> Self {
        Self { data }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(DataAccess::from_config(config))
    }
}

// == Data Endpoints ==

/// Handler for GET /vehicles
pub async fn all_vehicles_handler(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>> {
    Ok(Json(state.data.get_all_vehicles().await?))
}

/// Handler for GET /vehicles/new
pub async fn new_vehicles_handler(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>> {
    Ok(Json(state.data.get_new_vehicles().await?))
}

/// Handler for GET /vehicles/:id
///
/// Responds 404 when the id is not in the collection and 502 when the
/// collection could not be fetched.
pub async fn vehicle_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>> {
    Ok(Json(state.data.get_vehicle_by_id(&id).await?))
}

/// Handler for GET /profile
pub async fn profile_handler(State(state): State<AppState>) -> Result<Json<Profile>> {
    Ok(Json(state.data.get_user_profile().await?))
}

/// Handler for GET /profile/cars
pub async fn user_cars_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserCarListing>>> {
    Ok(Json(state.data.get_user_cars().await?))
}

// == Cache Administration ==

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.data.get_cache_stats().await.into())
}

/// Handler for GET /cache/keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    Json(KeysResponse::new(state.data.cached_keys().await))
}

/// Handler for DELETE /cache
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.data.clear_all_cache().await;
    Json(ClearResponse::all())
}

/// Handler for DELETE /cache/keys/:key
///
/// Clearing a key that is not cached still succeeds.
pub async fn clear_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<ClearResponse> {
    state.data.clear_cache_entry(&key).await;
    Json(ClearResponse::keys([key]))
}

/// Handler for DELETE /cache/vehicles
pub async fn clear_vehicles_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.data.clear_vehicle_cache().await;
    Json(ClearResponse::keys(keys::VEHICLE_LIST_KEYS))
}

/// Handler for DELETE /cache/profile
pub async fn clear_profile_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.data.clear_profile_cache().await;
    Json(ClearResponse::keys(keys::PROFILE_KEYS))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
