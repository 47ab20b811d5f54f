//! Built-in mock dataset, served when the remote API is switched off.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Map;

use crate::data::{Profile, UserCarListing, Vehicle, VehicleSource};
use crate::error::Result;

/// Vehicles at or after this model year count as "new".
pub const NEW_VEHICLE_MIN_YEAR: u32 = 2020;

/// Serves a fixed dataset after a simulated network delay.
#[derive(Debug, Clone)]
pub struct MockVehicleSource {
    latency: Duration,
}

impl Default for MockVehicleSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl MockVehicleSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl VehicleSource for MockVehicleSource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.simulate_latency().await;
        Ok(mock_vehicles())
    }

    async fn fetch_new_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.simulate_latency().await;
        Ok(mock_vehicles()
            .into_iter()
            .filter(|v| v.year_number().is_some_and(|y| y >= NEW_VEHICLE_MIN_YEAR))
            .collect())
    }

    async fn fetch_user_profile(&self) -> Result<Profile> {
        self.simulate_latency().await;
        Ok(Profile {
            id: Some("1".to_string()),
            name: "Juan Dela Cruz".to_string(),
            email: "juan.delacruz@example.com".to_string(),
            phone: "+63 917 123 4567".to_string(),
            location: Some("Manila, Philippines".to_string()),
            join_date: Some("2023-01-15".to_string()),
            total_sales: Some(3),
            total_purchases: Some(1),
        })
    }

    async fn fetch_user_cars(&self) -> Result<Vec<UserCarListing>> {
        self.simulate_latency().await;
        Ok(vec![
            UserCarListing {
                id: "101".to_string(),
                make: "Toyota".to_string(),
                model: "Vios".to_string(),
                year: 2018,
                price: 650_000,
                status: "For Sale".to_string(),
                listed_date: "2024-01-10".to_string(),
                sold_date: None,
                image_url: Some(image_url("1621007947382-bb3c3994e3fb", 400)),
            },
            UserCarListing {
                id: "102".to_string(),
                make: "Honda".to_string(),
                model: "City".to_string(),
                year: 2019,
                price: 750_000,
                status: "Sold".to_string(),
                listed_date: "2023-12-15".to_string(),
                sold_date: Some("2024-01-05".to_string()),
                image_url: Some(image_url("1606664515524-ed2f786a0bd6", 400)),
            },
        ])
    }
}

const IMAGE_BASE: &str = "https://images.unsplash.com/photo-";

struct MockRecord {
    id: u32,
    make: &'static str,
    model: &'static str,
    year: u32,
    price: u64,
    mileage: u32,
    fuel_type: &'static str,
    location: &'static str,
    photo: &'static str,
    description: &'static str,
}

impl MockRecord {
    fn to_vehicle(&self) -> Vehicle {
        let mut fields = Map::new();
        fields.insert("id".into(), self.id.into());
        fields.insert("make".into(), self.make.into());
        fields.insert("model".into(), self.model.into());
        fields.insert("year".into(), self.year.into());
        fields.insert("price".into(), self.price.into());
        fields.insert("mileage".into(), self.mileage.into());
        fields.insert("fuelType".into(), self.fuel_type.into());
        fields.insert("location".into(), self.location.into());
        fields.insert("imageUrl".into(), image_url(self.photo, 1000).into());
        fields.insert("description".into(), self.description.into());
        Vehicle::from(fields)
    }
}

fn image_url(photo: &str, width: u32) -> String {
    format!("{IMAGE_BASE}{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w={width}&q=80")
}

const MOCK_RECORDS: [MockRecord; 7] = [
    MockRecord {
        id: 1,
        make: "Toyota",
        model: "Camry",
        year: 2020,
        price: 1_200_000,
        mileage: 25_000,
        fuel_type: "Petrol",
        location: "Manila",
        photo: "1621007947382-bb3c3994e3fb",
        description: "Well-maintained Toyota Camry with excellent fuel efficiency",
    },
    MockRecord {
        id: 2,
        make: "Honda",
        model: "Civic",
        year: 2019,
        price: 950_000,
        mileage: 35_000,
        fuel_type: "Petrol",
        location: "Quezon City",
        photo: "1606664515524-ed2f786a0bd6",
        description: "Sporty Honda Civic with modern features",
    },
    MockRecord {
        id: 3,
        make: "Mitsubishi",
        model: "Montero Sport",
        year: 2021,
        price: 1_800_000,
        mileage: 15_000,
        fuel_type: "Diesel",
        location: "Cebu",
        photo: "1544636331-e26879cd4d9b",
        description: "Powerful SUV perfect for family adventures",
    },
    MockRecord {
        id: 4,
        make: "Nissan",
        model: "Navara",
        year: 2020,
        price: 1_350_000,
        mileage: 28_000,
        fuel_type: "Diesel",
        location: "Davao",
        photo: "1563720223185-11003d516935",
        description: "Reliable pickup truck for work and leisure",
    },
    MockRecord {
        id: 5,
        make: "Hyundai",
        model: "Accent",
        year: 2018,
        price: 680_000,
        mileage: 45_000,
        fuel_type: "Petrol",
        location: "Manila",
        photo: "1552519507-da3b142c6e3d",
        description: "Affordable and fuel-efficient sedan",
    },
    MockRecord {
        id: 7,
        make: "Suzuki",
        model: "Swift",
        year: 2020,
        price: 720_000,
        mileage: 22_000,
        fuel_type: "Petrol",
        location: "Taguig",
        photo: "1583121274602-3e2820c69888",
        description: "Zippy hatchback perfect for urban driving",
    },
    MockRecord {
        id: 8,
        make: "Isuzu",
        model: "D-Max",
        year: 2021,
        price: 1_450_000,
        mileage: 18_000,
        fuel_type: "Diesel",
        location: "Pasig",
        photo: "1533473359331-0135ef1b58bf",
        description: "Tough and reliable pickup truck",
    },
];

/// The fixed mock vehicle collection.
pub fn mock_vehicles() -> Vec<Vehicle> {
    MOCK_RECORDS.iter().map(MockRecord::to_vehicle).collect()
}
