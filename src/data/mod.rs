//! Data Module
//!
//! Marketplace records, the sources they are fetched from, and the
//! cache-backed access layer the UI reads through.

mod access;
mod mock;
mod models;
mod source;

pub use access::{DataAccess, SharedCache};
pub use mock::{mock_vehicles, MockVehicleSource, NEW_VEHICLE_MIN_YEAR};
pub use models::{Profile, UserCarListing, Vehicle};
pub use source::{placeholder_profile, HttpVehicleSource, VehicleSource};
