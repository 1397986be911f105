//! The main cache interface.
//!
//! This module provides the primary `Cache` type that users interact with.
//! It wraps the internal storage and owns the background garbage collector's
//! lifecycle.

use indexmap::Equivalent;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::CacheConfig;
use crate::error::CacheResult;
use crate::gc;
use crate::stats::StatsSnapshot;
use crate::storage::Db;

/// A generic, thread-safe, in-memory cache with TTL expiry and an optional
/// size bound.
///
/// Every entry shares the single TTL fixed at construction. Expiry is
/// enforced by a background collector sweeping on a fixed interval, not on
/// read: an expired entry stays visible until the next sweep (or until the
/// size bound pushes it out).
///
/// Cloning a `Cache` creates a new handle to the same underlying data.
///
/// # Example
/// ```
/// use ttl_cache::{Cache, CacheConfig};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), ttl_cache::CacheError> {
/// let config = CacheConfig::new()
///     .ttl(Duration::from_secs(300))
///     .gc_interval(Duration::from_secs(10))
///     .max_size(10_000);
///
/// let cache: Cache<String, String> = Cache::new("sessions", config)?;
///
/// cache.set("user:123".to_string(), "Alice".to_string());
/// if let Some(value) = cache.get("user:123") {
///     println!("Found: {value}");
/// }
///
/// cache.stop_garbage_collection();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Opaque label for identification in logs; never interpreted.
    name: String,

    /// Shared storage, also held by the collector task.
    db: Arc<Db<K, V>>,

    /// Stop signal for the collector. Sending is idempotent, and the channel
    /// closing (all handles dropped) stops the collector too.
    stop: watch::Sender<bool>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache and start its background garbage collector.
    ///
    /// `name` is an opaque label surfaced in log events. Fails with a
    /// [`CacheError`](crate::CacheError) when the TTL or GC interval is
    /// zero; on failure nothing is allocated and no task is spawned.
    ///
    /// Must be called within a tokio runtime, which the collector task runs
    /// on.
    pub fn new(name: impl Into<String>, config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;

        let name = name.into();
        let db = Arc::new(Db::new(config));
        let (stop_tx, stop_rx) = watch::channel(false);
        // Detached on purpose; the watch channel is the only lifecycle handle.
        let _ = gc::spawn_collector(name.clone(), Arc::clone(&db), stop_rx);

        Ok(Self {
            name,
            db,
            stop: stop_tx,
        })
    }

    /// Get the value for a key.
    ///
    /// Returns `None` if the key is absent. No expiry check happens here;
    /// an entry past its TTL remains visible until the next sweep.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.db.get(key)
    }

    /// Insert or overwrite the value for a key. Infallible.
    ///
    /// The entry expires TTL from now. Overwriting an existing key replaces
    /// its value in place but stamps a fresh expiry record alongside the old
    /// one, so the key's original expiry still drives size-bound eviction
    /// order.
    pub fn set(&self, key: K, value: V) {
        self.db.set(key, value);
    }

    /// Remove a key. Returns `true` if it existed; a no-op otherwise.
    ///
    /// Only the stored value goes away. Expiry bookkeeping for the key
    /// remains until the next sweep, trading a bounded amount of delayed
    /// reclamation for O(1) deletes.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.db.delete(key)
    }

    /// Signal the background garbage collector to stop.
    ///
    /// The transition is one-way: no sweep runs after a sweep in flight
    /// finishes. Calling this more than once is a no-op, and dropping the
    /// last handle to the cache stops the collector as well.
    pub fn stop_garbage_collection(&self) {
        let _ = self.stop.send(true);
    }

    /// Number of entries currently stored.
    ///
    /// May include entries past their TTL that the collector has not swept
    /// yet.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Whether the cache currently stores no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of expiry records awaiting the collector.
    ///
    /// This counts bookkeeping, not live entries: deleted keys keep their
    /// records until swept, and overwritten keys hold one record per set.
    pub fn expiry_count(&self) -> usize {
        self.db.expiry_count()
    }

    /// The label this cache was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A point-in-time snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.db.stats().snapshot()
    }
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            db: Arc::clone(&self.db),
            stop: self.stop.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_basic_operations() {
        let cache: Cache<String, String> =
            Cache::new("test", CacheConfig::default()).unwrap();

        cache.set("key".to_string(), "value".to_string());
        assert_eq!(cache.get("key"), Some("value".to_string()));
        assert_eq!(cache.len(), 1);

        assert!(cache.delete("key"));
        assert_eq!(cache.get("key"), None);
        assert!(!cache.delete("key"));

        cache.stop_garbage_collection();
    }

    #[tokio::test]
    async fn test_invalid_config_spawns_nothing() {
        let result: CacheResult<Cache<String, String>> =
            Cache::new("test", CacheConfig::new().ttl(Duration::ZERO));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clone_shares_data() {
        let cache1: Cache<String, String> =
            Cache::new("test", CacheConfig::default()).unwrap();
        cache1.set("key".to_string(), "v1".to_string());

        let cache2 = cache1.clone();
        assert_eq!(cache2.get("key"), Some("v1".to_string()));

        cache2.set("key2".to_string(), "v2".to_string());
        assert_eq!(cache1.get("key2"), Some("v2".to_string()));

        cache1.stop_garbage_collection();
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let cache: Cache<String, String> =
            Cache::new("test", CacheConfig::default()).unwrap();

        cache.stop_garbage_collection();
        cache.stop_garbage_collection();
        cache.clone().stop_garbage_collection();
    }

    #[tokio::test]
    async fn test_name_label() {
        let cache: Cache<String, u64> =
            Cache::new("sessions", CacheConfig::default()).unwrap();
        assert_eq!(cache.name(), "sessions");
        cache.stop_garbage_collection();
    }

    #[tokio::test]
    async fn test_stats_snapshot() {
        let cache: Cache<String, String> =
            Cache::new("test", CacheConfig::default()).unwrap();

        cache.set("key".to_string(), "value".to_string());
        let _ = cache.get("key");
        let _ = cache.get("missing");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);

        cache.stop_garbage_collection();
    }

    #[tokio::test]
    async fn test_non_string_keys() {
        let cache: Cache<u64, Vec<u8>> =
            Cache::new("blobs", CacheConfig::default()).unwrap();

        cache.set(42, vec![1, 2, 3]);
        assert_eq!(cache.get(&42), Some(vec![1, 2, 3]));
        assert_eq!(cache.get(&7), None);

        cache.stop_garbage_collection();
    }
}
