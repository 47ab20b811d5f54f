//! Error types for the data-access layer
//!
//! A cache miss is not an error; only remote fetch failures and unknown
//! vehicle ids are.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Failures surfaced to callers of the data-access functions.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure talking to the remote API
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("Remote API returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Response or cached payload did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested vehicle id is not in the vehicle collection
    #[error("Vehicle not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// True for an unknown vehicle id, false for any fetch failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Request(_) | ApiError::Status { .. } | ApiError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the data-access layer.
pub type Result<T> = std::result::Result<T, ApiError>;
