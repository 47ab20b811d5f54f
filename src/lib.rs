//! Vehicle Cache - cache-backed marketplace data service
//!
//! Serves vehicle listings and user data to the marketplace UI, reading
//! through an in-memory TTL cache in front of the remote vehicle API.

pub mod api;
pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use data::DataAccess;
pub use error::ApiError;
pub use tasks::spawn_stats_monitor;
