//! Response models for the cache server API

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// == Entry Response ==
/// Response body for a single-entry lookup (`GET /api/lru/{key}`).
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub key: String,
    pub value: Value,
    /// Absolute expiry as a Unix timestamp in seconds
    pub expires: i64,
}

impl EntryResponse {
    pub fn new(key: impl Into<String>, value: Value, expires_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            value,
            expires: expires_at.timestamp(),
        }
    }
}

// == Keys/Values Response ==
/// Response body for the full dump (`GET /api/lru`).
///
/// `keys[i]` pairs with `values[i]`; the order itself carries no meaning.
#[derive(Debug, Clone, Serialize)]
pub struct KeysValuesResponse {
    pub keys: Vec<String>,
    pub values: Vec<Value>,
}

impl KeysValuesResponse {
    pub fn new(keys: Vec<String>, values: Vec<Value>) -> Self {
        Self { keys, values }
    }
}

// == Message Response ==
/// Generic success message body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// == Error Response ==
/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// == Health Response ==
/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
