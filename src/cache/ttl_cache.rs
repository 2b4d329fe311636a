//! TTL Cache Module
//!
//! Public cache handle: a shared [`CacheStore`] plus the background sweep
//! task that keeps it free of expired entries.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

// == TTL Cache ==
/// Concurrent key-value cache with optional per-entry expiration.
///
/// Creating a cache spawns its sweep task on the current Tokio runtime. The
/// task stops on [`TtlCache::shutdown`] or when the cache is dropped.
///
/// Wrap the cache in an [`Arc`] to share it between tasks or threads.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use ttl_cache::TtlCache;
///
/// #[tokio::main]
/// async fn main() {
///     let cache = TtlCache::new();
///     cache.set("session", "abc123".to_string(), Duration::from_secs(5));
///     cache.set("config", "static".to_string(), Duration::ZERO);
///
///     assert_eq!(cache.get("session").as_deref(), Some("abc123"));
///     cache.shutdown().await;
/// }
/// ```
#[derive(Debug)]
pub struct TtlCache<V> {
    store: Arc<CacheStore<V>>,
    shutdown_tx: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a cache with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime. Use
    /// [`TtlCache::try_new`] to get an error instead.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime or if the configuration
    /// is invalid. Use [`TtlCache::try_with_config`] to get an error instead.
    pub fn with_config(config: CacheConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(cache) => cache,
            Err(err) => panic!("ttl_cache::TtlCache could not be created: {err}"),
        }
    }

    /// Creates a cache with the default configuration.
    pub fn try_new() -> Result<Self> {
        Self::try_with_config(CacheConfig::default())
    }

    /// Creates a cache with a custom configuration.
    ///
    /// # Errors
    /// - `CacheError::InvalidConfig` if the sweep interval is zero
    /// - `CacheError::NoRuntime` if no Tokio runtime is available
    pub fn try_with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(CacheStore::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let sweeper = spawn_sweep_task(store.clone(), config.sweep_interval, shutdown_rx);

        Ok(Self {
            store,
            shutdown_tx,
            sweeper: Mutex::new(Some(sweeper)),
        })
    }

    // == Set ==
    /// Stores a value, replacing any previous entry for the key.
    ///
    /// A zero `ttl` means the entry never expires.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.store.set(key.into(), value, ttl);
    }

    // == Get ==
    /// Returns a clone of the value if the key is present and not expired.
    ///
    /// Reading an expired key removes it.
    pub fn get(&self, key: &str) -> Option<V> {
        self.store.get(key)
    }

    // == Contains Key ==
    /// Returns true if the key is present and not expired.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    // == Delete ==
    /// Removes the key if present.
    pub fn delete(&self, key: &str) {
        self.store.delete(key);
    }

    // == Purge Expired ==
    /// Runs one sweep on the calling thread and returns the number of
    /// entries removed.
    pub fn purge_expired(&self) -> usize {
        self.store.purge_expired()
    }

    /// Number of stored entries, counting expired entries not yet removed.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // == Lifecycle ==
    /// Returns true while the background sweep task is running.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the background sweep task and waits for it to exit.
    ///
    /// Calling this more than once is a no-op. The cache stays usable;
    /// expired entries are then only removed when read or purged.
    pub async fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);

        let handle = self
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            match handle.await {
                Ok(()) => info!("TTL cache shut down"),
                Err(err) => warn!("TTL sweep task ended abnormally: {}", err),
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_set_then_get_round_trip() {
        let cache = TtlCache::new();

        cache.set("key1", "value1".to_string(), Duration::ZERO);

        assert_eq!(cache.get("key1").as_deref(), Some("value1"));
        assert!(cache.contains_key("key1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary() {
        let cache = TtlCache::new();

        cache.set("key1", "value1".to_string(), Duration::from_secs(5));
        assert_eq!(cache.get("key1").as_deref(), Some("value1"));

        tokio::time::advance(Duration::from_secs(6)).await;

        assert!(cache.get("key1").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_purge_expired_without_get() {
        let cache = TtlCache::new();

        for i in 0..10 {
            cache.set(format!("short_{i}"), i, Duration::from_secs(1));
        }
        cache.set("forever", 99, Duration::ZERO);

        tokio::time::advance(Duration::from_secs(2)).await;

        assert_eq!(cache.len(), 11);
        assert_eq!(cache.purge_expired(), 10);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_stops_sweeper() {
        let cache: TtlCache<u32> = TtlCache::new();
        assert!(cache.is_sweeping());

        cache.shutdown().await;
        assert!(!cache.is_sweeping());

        // Idempotent, and the cache keeps working
        cache.shutdown().await;
        cache.set("key", 1, Duration::ZERO);
        assert_eq!(cache.get("key"), Some(1));
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let config = CacheConfig::new().with_sweep_interval(Duration::ZERO);
        let result = TtlCache::<u32>::try_with_config(config);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_try_new_outside_runtime() {
        let result = TtlCache::<u32>::try_new();
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }

    #[test]
    #[should_panic(expected = "could not be created")]
    fn test_new_outside_runtime_panics() {
        let _cache = TtlCache::<u32>::new();
    }
}
