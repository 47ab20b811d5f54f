//! API Routes
//!
//! Configures the Axum router with the data and cache administration endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    all_vehicles_handler, clear_all_handler, clear_key_handler, clear_profile_handler,
    clear_vehicles_handler, health_handler, keys_handler, new_vehicles_handler, profile_handler,
    stats_handler, user_cars_handler, vehicle_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /vehicles` - All vehicles
/// - `GET /vehicles/new` - Recently listed vehicles
/// - `GET /vehicles/:id` - One vehicle
/// - `GET /profile` - Signed-in user's profile
/// - `GET /profile/cars` - Signed-in user's listings
/// - `GET /cache/stats` - Entry counts
/// - `GET /cache/keys` - Stored keys
/// - `DELETE /cache` - Clear everything
/// - `DELETE /cache/keys/:key` - Clear one key
/// - `DELETE /cache/vehicles` - Clear both vehicle lists
/// - `DELETE /cache/profile` - Clear profile and listings
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, the UI is served from elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/vehicles", get(all_vehicles_handler))
        .route("/vehicles/new", get(new_vehicles_handler))
        .route("/vehicles/:id", get(vehicle_handler))
        .route("/profile", get(profile_handler))
        .route("/profile/cars", get(user_cars_handler))
        .route("/cache", delete(clear_all_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/keys", get(keys_handler))
        .route("/cache/keys/:key", delete(clear_key_handler))
        .route("/cache/vehicles", delete(clear_vehicles_handler))
        .route("/cache/profile", delete(clear_profile_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
