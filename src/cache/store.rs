//! Cache Store Module
//!
//! The cache engine: a hash index and a recency list kept in lockstep
//! under one exclusive lock, with LRU eviction and lazy TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::cache::entry::Entry;
use crate::cache::list::RecencyList;
use crate::error::{CacheError, Result};

// == Guarded State ==
/// Everything the lock protects. The index maps each key to the slot of
/// its node in the recency list; the list owns the entries.
#[derive(Debug)]
struct Inner<K, V> {
    index: HashMap<K, usize>,
    list: RecencyList<Entry<K, V>>,
}

// == LRU Cache ==
/// Bounded in-memory key/value cache with LRU eviction and per-entry TTL.
///
/// Every operation, reads included, takes the one exclusive lock: a
/// successful lookup relinks its entry at the MRU position, and any
/// operation may purge an expired entry it touches. The lock is held for
/// O(1) work except [`get_all`](Self::get_all), which walks all entries.
///
/// Expiration is lazy. An expired entry keeps occupying a slot, and
/// counts toward capacity, until some operation visits it or ordinary
/// LRU overflow pushes it out; no background task ever runs.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: NonZeroUsize,
    default_ttl: Duration,
    inner: Mutex<Inner<K, V>>,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache bounded to `capacity` entries.
    ///
    /// `default_ttl` applies to entries stored without an explicit TTL.
    pub fn new(capacity: NonZeroUsize, default_ttl: Duration) -> Self {
        Self {
            capacity,
            default_ttl,
            inner: Mutex::new(Inner {
                index: HashMap::new(),
                list: RecencyList::new(),
            }),
        }
    }

    // == Put ==
    /// Stores or replaces the entry for `key` at the MRU position.
    ///
    /// A `ttl` of `None` or zero falls back to the default TTL; a
    /// negative `ttl` stores an entry that is already expired. Replacing
    /// an existing key removes its old node first, so a replace never
    /// evicts the key being stored, even at capacity one. If the insert
    /// overflows capacity, the least-recently-used entry is evicted.
    pub fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        let now = Utc::now();
        let ttl = match ttl {
            Some(d) if !d.is_zero() => d,
            _ => self.default_ttl,
        };
        let expires_at = match now.checked_add_signed(ttl) {
            Some(at) => at,
            None if ttl < Duration::zero() => DateTime::<Utc>::MIN_UTC,
            None => DateTime::<Utc>::MAX_UTC,
        };

        let mut inner = self.inner.lock();

        if let Some(idx) = inner.index.remove(&key) {
            inner.list.remove(idx);
        }

        let idx = inner.list.push_front(Entry::new(key.clone(), value, expires_at));
        inner.index.insert(key, idx);

        if inner.list.len() > self.capacity.get() {
            if let Some(lru) = inner.list.lru() {
                let evicted = inner.list.remove(lru);
                inner.index.remove(&evicted.key);
            }
        }
    }

    // == Get ==
    /// Returns the value and expiry instant for `key`, marking the entry
    /// most recently used.
    ///
    /// An entry found expired is purged before reporting
    /// [`CacheError::KeyNotFound`]; callers cannot distinguish a missing
    /// key from an expired one.
    pub fn get(&self, key: &K) -> Result<(V, DateTime<Utc>)> {
        let now = Utc::now();
        let mut inner = self.inner.lock();

        let idx = *inner.index.get(key).ok_or(CacheError::KeyNotFound)?;

        if inner.list.get(idx).is_expired(now) {
            inner.list.remove(idx);
            inner.index.remove(key);
            return Err(CacheError::KeyNotFound);
        }

        inner.list.promote(idx);
        let entry = inner.list.get(idx);
        Ok((entry.value.clone(), entry.expires_at))
    }

    // == Get All ==
    /// Returns every live key and value as positionally paired vectors.
    ///
    /// The single traversal purges each expired entry it visits; this is
    /// the only bulk expiration the cache performs. Callers must not rely
    /// on the order of the result. [`CacheError::CacheEmpty`] is returned
    /// when no live entries remain after the pass.
    pub fn get_all(&self) -> Result<(Vec<K>, Vec<V>)> {
        let now = Utc::now();
        let mut inner = self.inner.lock();

        let mut keys = Vec::with_capacity(inner.list.len());
        let mut values = Vec::with_capacity(inner.list.len());

        let mut cursor = inner.list.first();
        while let Some(idx) = cursor {
            // Advance before a potential removal invalidates the slot.
            cursor = inner.list.next_of(idx);

            if inner.list.get(idx).is_expired(now) {
                let expired = inner.list.remove(idx);
                inner.index.remove(&expired.key);
            } else {
                let entry = inner.list.get(idx);
                keys.push(entry.key.clone());
                values.push(entry.value.clone());
            }
        }

        if keys.is_empty() {
            return Err(CacheError::CacheEmpty);
        }
        Ok((keys, values))
    }

    // == Evict ==
    /// Removes the entry for `key` and returns its value.
    ///
    /// An expired entry is removed all the same but reported as
    /// [`CacheError::KeyNotFound`]: logical absence wins over physical
    /// presence.
    pub fn evict(&self, key: &K) -> Result<V> {
        let now = Utc::now();
        let mut inner = self.inner.lock();

        let idx = *inner.index.get(key).ok_or(CacheError::KeyNotFound)?;
        inner.index.remove(key);
        let entry = inner.list.remove(idx);

        if entry.is_expired(now) {
            return Err(CacheError::KeyNotFound);
        }
        Ok(entry.value)
    }

    // == Evict All ==
    /// Unconditionally removes every entry, expired or not.
    pub fn evict_all(&self) {
        let mut inner = self.inner.lock();
        inner.index.clear();
        inner.list.clear();
    }

    // == Occupancy ==
    /// Number of entries occupying slots, including expired entries that
    /// have not been purged yet.
    pub fn len(&self) -> usize {
        self.inner.lock().list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Asserts the structural invariants: index and list describe the
    /// same entries one-to-one, occupancy never exceeds capacity, and
    /// every link pair is mutually consistent.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let inner = self.inner.lock();
        let reachable = inner.list.check_links();

        assert!(
            reachable.len() <= self.capacity.get(),
            "occupancy {} exceeds capacity {}",
            reachable.len(),
            self.capacity
        );
        assert_eq!(
            inner.index.len(),
            reachable.len(),
            "index size diverges from list size"
        );
        for idx in &reachable {
            let entry = inner.list.get(*idx);
            assert_eq!(
                inner.index.get(&entry.key),
                Some(idx),
                "index does not point at the slot holding its key"
            );
        }
    }
}
