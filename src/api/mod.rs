//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /api/lru` - Store or replace an entry
//! - `GET /api/lru/:key` - Look up a single entry
//! - `GET /api/lru` - Dump all live entries
//! - `DELETE /api/lru/:key` - Remove a single entry
//! - `DELETE /api/lru` - Remove every entry
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
