//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Envelope returned by every endpoint
///
/// `status` carries the canonical reason phrase of the HTTP status code the
/// response is sent with ("OK", "Unauthorized", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// Human-readable outcome
    pub message: String,

    /// Response payload, `null` when there is nothing to return
    pub data: Option<T>,

    /// Error details, empty on success
    #[serde(default)]
    pub errors: Vec<String>,

    /// HTTP reason phrase
    pub status: String,
}

impl<T> ApiResponse<T> {
    /// Create a response carrying data
    pub fn with_data(message: impl Into<String>, data: T, status: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
            status: status.into(),
        }
    }

    /// Create a response without a payload
    pub fn message(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            errors: Vec::new(),
            status: status.into(),
        }
    }

    /// Attach error details
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Server version
    pub version: String,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}
