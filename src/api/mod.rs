//! API Module
//!
//! HTTP handlers and routing for the marketplace data service.
//!
//! # Endpoints
//! - `GET /vehicles`, `/vehicles/new`, `/vehicles/:id` - Vehicle data
//! - `GET /profile`, `/profile/cars` - Signed-in user data
//! - `GET /cache/stats`, `/cache/keys` - Cache inspection
//! - `DELETE /cache`, `/cache/keys/:key`, `/cache/vehicles`, `/cache/profile` - Invalidation
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
