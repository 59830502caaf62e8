//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Duration;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::LruCache;
use crate::error::{CacheError, Result};
use crate::models::{
    EntryResponse, HealthResponse, KeysValuesResponse, MessageResponse, PutRequest,
};

/// Application state shared across all handlers.
///
/// The cache engine carries its own lock, so handlers share it through
/// a bare `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub cache: Arc<LruCache<String, Value>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: LruCache<String, Value>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when `cache_size` is zero.
    pub fn from_config(config: &crate::config::Config) -> anyhow::Result<Self> {
        let capacity =
            NonZeroUsize::new(config.cache_size).context("CACHE_SIZE must be at least 1")?;
        let default_ttl = i64::try_from(config.default_ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Ok(Self::new(LruCache::new(capacity, default_ttl)))
    }
}

/// Handler for POST /api/lru
///
/// Stores or replaces a cache entry with an optional TTL.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl();
    state.cache.put(req.key.clone(), req.value, ttl);
    debug!(key = %req.key, "stored cache entry");

    Ok((StatusCode::CREATED, Json(MessageResponse::new("cache added"))))
}

/// Handler for GET /api/lru/:key
///
/// Looks up a single entry; a hit marks it most recently used.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<EntryResponse>> {
    let (value, expires_at) = state.cache.get(&key)?;

    Ok(Json(EntryResponse::new(key, value, expires_at)))
}

/// Handler for GET /api/lru
///
/// Dumps every live entry as paired key and value arrays.
pub async fn get_all_handler(State(state): State<AppState>) -> Result<Json<KeysValuesResponse>> {
    let (keys, values) = state.cache.get_all()?;

    Ok(Json(KeysValuesResponse::new(keys, values)))
}

/// Handler for DELETE /api/lru/:key
///
/// Removes a single entry.
pub async fn evict_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode> {
    state.cache.evict(&key)?;
    debug!(%key, "evicted cache entry");

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/lru
///
/// Removes every entry.
pub async fn evict_all_handler(State(state): State<AppState>) -> StatusCode {
    state.cache.evict_all();
    info!("cache cleared");

    StatusCode::NO_CONTENT
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
