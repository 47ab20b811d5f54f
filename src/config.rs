//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Production vehicle listing endpoint.
pub const DEFAULT_VEHICLE_API_URL: &str =
    "https://b6f0c09yu4.execute-api.ap-east-1.amazonaws.com/Prod/vehicles";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Endpoint returning the full vehicle collection
    pub vehicle_api_url: String,
    /// Endpoint returning recently listed vehicles
    pub new_vehicles_url: String,
    /// Endpoint returning the signed-in user's profile, if deployed
    pub profile_api_url: Option<String>,
    /// Endpoint returning the signed-in user's listings, if deployed
    pub user_cars_api_url: Option<String>,
    /// Serve the built-in mock dataset instead of calling the remote API
    pub use_mock_data: bool,
    /// Simulated latency of the mock dataset in milliseconds
    pub mock_latency_ms: u64,
    /// Interval in seconds between cache stats reports
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `VEHICLE_API_URL` - Vehicle collection endpoint
    /// - `NEW_VEHICLES_URL` - New vehicles endpoint (default: `VEHICLE_API_URL`)
    /// - `PROFILE_API_URL` - User profile endpoint (default: unset)
    /// - `USER_CARS_API_URL` - User listings endpoint (default: unset)
    /// - `USE_MOCK_DATA` - `true`/`1` to use the mock dataset (default: false)
    /// - `MOCK_LATENCY_MS` - Mock dataset latency (default: 500)
    /// - `STATS_INTERVAL` - Stats report frequency in seconds (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let vehicle_api_url = non_empty_var("VEHICLE_API_URL").unwrap_or(defaults.vehicle_api_url);

        Self {
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            new_vehicles_url: non_empty_var("NEW_VEHICLES_URL")
                .unwrap_or_else(|| vehicle_api_url.clone()),
            vehicle_api_url,
            profile_api_url: non_empty_var("PROFILE_API_URL"),
            user_cars_api_url: non_empty_var("USER_CARS_API_URL"),
            use_mock_data: env::var("USE_MOCK_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.use_mock_data),
            mock_latency_ms: parsed_var("MOCK_LATENCY_MS").unwrap_or(defaults.mock_latency_ms),
            stats_interval: parsed_var("STATS_INTERVAL").unwrap_or(defaults.stats_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            vehicle_api_url: DEFAULT_VEHICLE_API_URL.to_string(),
            new_vehicles_url: DEFAULT_VEHICLE_API_URL.to_string(),
            profile_api_url: None,
            user_cars_api_url: None,
            use_mock_data: false,
            mock_latency_ms: 500,
            stats_interval: 5,
        }
    }
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.vehicle_api_url, DEFAULT_VEHICLE_API_URL);
        assert_eq!(config.new_vehicles_url, DEFAULT_VEHICLE_API_URL);
        assert!(config.profile_api_url.is_none());
        assert!(!config.use_mock_data);
        assert_eq!(config.mock_latency_ms, 500);
        assert_eq!(config.stats_interval, 5);
    }

    #[test]
    fn test_config_from_env_defaults() {
        for name in [
            "SERVER_PORT",
            "VEHICLE_API_URL",
            "NEW_VEHICLES_URL",
            "PROFILE_API_URL",
            "USER_CARS_API_URL",
            "USE_MOCK_DATA",
            "MOCK_LATENCY_MS",
            "STATS_INTERVAL",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.vehicle_api_url, DEFAULT_VEHICLE_API_URL);
        assert_eq!(config.new_vehicles_url, DEFAULT_VEHICLE_API_URL);
        assert!(!config.use_mock_data);
        assert_eq!(config.stats_interval, 5);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
