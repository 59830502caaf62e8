//! Cache Entry Module
//!
//! A single cached item: key, value, and absolute expiry instant.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// One cached item together with the instant it stops being served.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    /// Lookup key, mirrored in the cache index
    pub key: K,
    /// Opaque payload, never inspected by the cache
    pub value: V,
    /// Instant after which the entry is logically absent
    pub expires_at: DateTime<Utc>,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry expiring at `expires_at`.
    pub fn new(key: K, value: V, expires_at: DateTime<Utc>) -> Self {
        Self { key, value, expires_at }
    }

    /// Whether the entry is expired as of `now`.
    ///
    /// Expiry is strict: an entry observed exactly at `expires_at` is
    /// still live.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
