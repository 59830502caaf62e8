//! lrucached - An in-memory LRU cache server
//!
//! Bounded key/value caching with LRU eviction and per-entry TTL,
//! served over a small REST API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::LruCache;
pub use config::Config;
