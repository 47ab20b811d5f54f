//! Remote data sources
//!
//! [`VehicleSource`] is the seam between the cache-backed access layer and
//! wherever marketplace data actually comes from.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::data::{Profile, UserCarListing, Vehicle};
use crate::error::{ApiError, Result};

/// Uncached access to marketplace data.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Full vehicle collection.
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>>;

    /// Recently listed vehicles.
    async fn fetch_new_vehicles(&self) -> Result<Vec<Vehicle>>;

    async fn fetch_user_profile(&self) -> Result<Profile>;

    async fn fetch_user_cars(&self) -> Result<Vec<UserCarListing>>;
}

/// Profile returned while no account API is configured.
pub fn placeholder_profile() -> Profile {
    Profile {
        name: "Juan Dela Cruz".to_string(),
        email: "juan.delacruz@example.com".to_string(),
        phone: "+63 917 123 4567".to_string(),
        ..Profile::default()
    }
}

// == HTTP Source ==
/// Fetches marketplace data from the remote vehicle API.
#[derive(Debug, Clone)]
pub struct HttpVehicleSource {
    client: Client,
    vehicles_url: String,
    new_vehicles_url: String,
    profile_url: Option<String>,
    user_cars_url: Option<String>,
}

impl HttpVehicleSource {
    /// Creates a source that reads both vehicle lists from `vehicles_url`.
    pub fn new(vehicles_url: impl Into<String>) -> Self {
        let vehicles_url = vehicles_url.into();
        Self {
            client: Client::new(),
            new_vehicles_url: vehicles_url.clone(),
            vehicles_url,
            profile_url: None,
            user_cars_url: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            client: Client::new(),
            vehicles_url: config.vehicle_api_url.clone(),
            new_vehicles_url: config.new_vehicles_url.clone(),
            profile_url: config.profile_api_url.clone(),
            user_cars_url: config.user_cars_api_url.clone(),
        }
    }

    pub fn with_new_vehicles_url(mut self, url: impl Into<String>) -> Self {
        self.new_vehicles_url = url.into();
        self
    }

    pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = Some(url.into());
        self
    }

    pub fn with_user_cars_url(mut self, url: impl Into<String>) -> Self {
        self.user_cars_url = Some(url.into());
        self
    }

    /// GETs `url` and decodes the JSON body.
    ///
    /// Any non-2xx status is a failure; the body is not inspected.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "fetching");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl VehicleSource for HttpVehicleSource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.get_json(&self.vehicles_url).await
    }

    async fn fetch_new_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.get_json(&self.new_vehicles_url).await
    }

    async fn fetch_user_profile(&self) -> Result<Profile> {
        match &self.profile_url {
            Some(url) => self.get_json(url).await,
            None => Ok(placeholder_profile()),
        }
    }

    async fn fetch_user_cars(&self) -> Result<Vec<UserCarListing>> {
        match &self.user_cars_url {
            Some(url) => self.get_json(url).await,
            None => Ok(Vec::new()),
        }
    }
}
