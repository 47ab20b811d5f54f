//! Response models for the HTTP API
//!
//! DTOs for the cache administration and health endpoints.

pub mod responses;

// Re-export commonly used types
pub use responses::{ClearResponse, HealthResponse, KeysResponse, StatsResponse};
