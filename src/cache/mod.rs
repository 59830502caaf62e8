//! Cache Module
//!
//! In-memory key/value caching with bounded capacity, LRU eviction, and
//! lazy per-entry TTL expiration.

mod entry;
mod list;
mod store;


// Re-export public types
pub use entry::Entry;
pub use store::LruCache;
