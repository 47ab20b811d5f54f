//! Marketplace records returned by the remote API.
//!
//! The remote API owns these shapes. A vehicle is kept as the JSON object the
//! API sent and read through accessors, so a record with odd or missing
//! fields still passes through unchanged. Account records are typed, but a
//! field with a null or wrongly typed value falls back to its default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A vehicle listing, as the API's JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vehicle {
    fields: Map<String, Value>,
}

impl From<Map<String, Value>> for Vehicle {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl Vehicle {
    /// Listing identifier, normalised to a string.
    ///
    /// `None` when the record has no id, or an id that is neither a string
    /// nor a number.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    /// Make of the vehicle. The listings API calls it `brand`, the mock
    /// dataset `make`.
    pub fn brand(&self) -> Option<String> {
        self.text("brand").or_else(|| self.text("make"))
    }

    pub fn model(&self) -> Option<String> {
        self.text("model")
    }

    /// Model year as a number, if it parses.
    pub fn year_number(&self) -> Option<u32> {
        match self.fields.get("year")? {
            Value::Number(n) => n.as_u64().and_then(|y| u32::try_from(y).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Raw value of any field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// A string or numeric field as text.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// The signed-in user's account details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    #[serde(
        deserialize_with = "opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub email: String,
    #[serde(deserialize_with = "lenient")]
    pub phone: String,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_purchases: Option<u32>,
}

/// A car the signed-in user has listed for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserCarListing {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub make: String,
    #[serde(deserialize_with = "lenient")]
    pub model: String,
    #[serde(deserialize_with = "lenient")]
    pub year: u32,
    #[serde(deserialize_with = "lenient")]
    pub price: u64,
    /// e.g. "For Sale", "Sold"
    #[serde(deserialize_with = "lenient")]
    pub status: String,
    #[serde(deserialize_with = "lenient")]
    pub listed_date: String,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sold_date: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// Null or a value of the wrong type becomes the field's default instead of
// failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// The API is inconsistent about quoting ids.
fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}
