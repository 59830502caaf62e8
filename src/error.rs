//! Error types for the cache server
//!
//! Unified error handling using thiserror, with conversion to HTTP
//! responses for the API layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Error Types ==
/// Unified error type for the cache server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent from the cache, or present but expired
    #[error("key not found")]
    KeyNotFound,

    /// No live entries remain in the cache
    #[error("cache is empty")]
    CacheEmpty,

    /// Request rejected before reaching the cache
    #[error("{0}")]
    InvalidRequest(String),
}

// == HTTP Response Conversion ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match self {
            CacheError::KeyNotFound => StatusCode::NOT_FOUND,
            // An empty cache is not a failure, just nothing to return.
            CacheError::CacheEmpty => return StatusCode::NO_CONTENT.into_response(),
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
