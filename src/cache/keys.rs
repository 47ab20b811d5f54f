//! Cache key names shared by the data-access layer and the monitor.

pub const ALL_VEHICLES: &str = "all_vehicles";
pub const NEW_VEHICLES: &str = "new_vehicles";
pub const USER_PROFILE: &str = "user_profile";
pub const USER_CARS: &str = "user_cars";

/// Prefix of per-vehicle keys; one slot per vehicle id looked up.
pub const VEHICLE_PREFIX: &str = "vehicle_";

/// Keys cleared by the monitor's "clear vehicles" action.
pub const VEHICLE_LIST_KEYS: [&str; 2] = [ALL_VEHICLES, NEW_VEHICLES];

/// Keys cleared by the monitor's "clear profile" action.
pub const PROFILE_KEYS: [&str; 2] = [USER_PROFILE, USER_CARS];

/// Builds the cache key for a single vehicle.
pub fn vehicle_key(id: &str) -> String {
    format!("{VEHICLE_PREFIX}{id}")
}
