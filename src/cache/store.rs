//! Cache Store Module
//!
//! The shared map and its single reader/writer lock. Every locking decision
//! for set, get, delete and the sweep lives here.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage guarded by one coarse lock.
///
/// Lookups share the read lock. Inserts, deletes, lazy expiry and sweeps take
/// the write lock, so two operations on the same key are ordered by whichever
/// acquires it first.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // No operation panics while holding a guard, so a poisoned lock still
    // guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    // == Set ==
    /// Stores a value, replacing any previous entry for the key.
    ///
    /// A zero `ttl` stores the entry without expiration.
    pub fn set(&self, key: String, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl, Instant::now());
        self.write().insert(key, entry);
    }

    // == Get ==
    /// Retrieves a clone of the value if the key is present and not expired.
    ///
    /// An expired entry is removed before the miss is returned. The check runs
    /// under the read lock and the removal under the write lock; the removal
    /// re-checks expiry so that an entry replaced in between is kept.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        {
            let entries = self.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired_at(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        self.remove_if_expired(key, now);
        None
    }

    /// Removes the entry only if it is still expired at `now` once the write
    /// lock is held. An entry replaced since the read phase is kept.
    pub(crate) fn remove_if_expired(&self, key: &str, now: Instant) -> bool {
        let mut entries = self.write();
        if entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now))
        {
            entries.remove(key);
            trace!(key, "Lazily removed expired entry");
            true
        } else {
            false
        }
    }

    // == Contains Key ==
    /// Returns true if the key is present and not expired. Never removes.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = Instant::now();
        self.read()
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    // == Delete ==
    /// Removes an entry by key. Absent keys are a no-op.
    pub fn delete(&self, key: &str) {
        self.write().remove(key);
    }

    // == Purge Expired ==
    /// Removes every entry that expired before the current instant.
    ///
    /// The clock is read once and the write lock is held for the whole scan.
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub(crate) fn purge_expired_at(&self, now: Instant) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, including expired entries not
    /// yet removed.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
