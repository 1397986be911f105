//! Internal storage implementation for the cache.
//!
//! One read/write lock guards both the key/value map and the expiry queue,
//! so the collector's sweep, inserts, and deletes serialize against each
//! other while point lookups proceed in parallel.

use indexmap::{Equivalent, IndexMap};
use std::collections::VecDeque;
use std::hash::Hash;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use crate::config::CacheConfig;
use crate::record::ExpiryRecord;
use crate::stats::CacheStats;

/// The shared state behind a cache: entries plus expiry bookkeeping.
///
/// This is the internal implementation; users interact with `Cache` instead.
#[derive(Debug)]
pub(crate) struct Db<K, V> {
    /// Map and queue together under one lock. Keeping them under the same
    /// guard is what makes the size guard's queue-consuming step atomic with
    /// the insert that triggered it.
    state: RwLock<State<K, V>>,

    /// Validated configuration for this cache instance.
    config: CacheConfig,

    /// Operation counters.
    stats: Arc<CacheStats>,
}

#[derive(Debug)]
struct State<K, V> {
    /// The authoritative key/value mapping. At most one value per key.
    entries: IndexMap<K, V>,

    /// Expiry records in insertion order. With a fixed TTL and a monotonic
    /// clock this is also non-decreasing expiry order. A key may appear more
    /// than once (overwrites append, deletes never remove), so queue length
    /// is bookkeeping volume, not a live-entry count.
    expiries: VecDeque<ExpiryRecord<K>>,
}

impl<K, V> Db<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create storage with the given (already validated) configuration.
    pub(crate) fn new(config: CacheConfig) -> Self {
        Self {
            state: RwLock::new(State {
                entries: IndexMap::new(),
                expiries: VecDeque::new(),
            }),
            config,
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key is absent. Expiry is not checked here: an
    /// expired entry stays visible until the next sweep removes it.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let state = self.read_lock()?;

        match state.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or overwrite a value.
    pub(crate) fn set(&self, key: K, value: V) {
        self.set_at(key, value, Instant::now());
    }

    /// Insert or overwrite a value, stamping its expiry from `now`.
    ///
    /// Appends an expiry record even when overwriting, so a repeatedly set
    /// key holds several records; only its latest value survives in the map.
    ///
    /// When a size bound is configured and now exceeded, the queue's head
    /// record is consumed and its key removed. The head may be stale (its
    /// key deleted or re-inserted since), in which case the queue still
    /// shrinks but nothing leaves the map; the bound is approximate under
    /// such sequences.
    pub(crate) fn set_at(&self, key: K, value: V, now: Instant) {
        let mut state = match self.write_lock() {
            Some(s) => s,
            None => return,
        };

        let record = ExpiryRecord::new(key.clone(), now + self.config.ttl);
        state.entries.insert(key, value);
        state.expiries.push_back(record);

        if self.config.max_size > 0 && state.entries.len() > self.config.max_size {
            if let Some(oldest) = state.expiries.pop_front() {
                if state.entries.swap_remove(&oldest.key).is_some() {
                    self.stats.record_eviction();
                }
            }
        }
    }

    /// Remove a key from the store.
    ///
    /// Returns `true` if the key existed. The expiry queue is left alone;
    /// any records for the key stay until a sweep or the size guard consumes
    /// them.
    pub(crate) fn delete<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let mut state = match self.write_lock() {
            Some(s) => s,
            None => return false,
        };

        state.entries.swap_remove(key).is_some()
    }

    /// Remove entries whose TTL elapsed strictly before `now`.
    ///
    /// Scans the expiry queue from its head and stops at the first record
    /// not yet expired; the consumed prefix is dropped. Records whose key is
    /// already gone are skipped over. Returns how many entries actually left
    /// the store.
    pub(crate) fn sweep(&self, now: Instant) -> usize {
        let mut state = match self.write_lock() {
            Some(s) => s,
            None => return 0,
        };

        let mut removed = 0;
        while state
            .expiries
            .front()
            .is_some_and(|record| record.expires_before(now))
        {
            if let Some(record) = state.expiries.pop_front() {
                if state.entries.swap_remove(&record.key).is_some() {
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            self.stats.record_expirations(removed as u64);
        }
        self.stats.record_sweep();
        removed
    }

    /// Number of entries currently in the store.
    pub(crate) fn len(&self) -> usize {
        self.read_lock().map_or(0, |state| state.entries.len())
    }

    /// Number of expiry records awaiting consumption.
    pub(crate) fn expiry_count(&self) -> usize {
        self.read_lock().map_or(0, |state| state.expiries.len())
    }

    /// Shared handle to the operation counters.
    pub(crate) fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    /// The configured collector wake interval.
    pub(crate) fn gc_interval(&self) -> Duration {
        self.config.gc_interval
    }

    /// Acquire the lock in shared mode, degrading to `None` when poisoned.
    fn read_lock(&self) -> Option<RwLockReadGuard<'_, State<K, V>>> {
        self.state.read().ok()
    }

    /// Acquire the lock in exclusive mode, degrading to `None` when poisoned.
    fn write_lock(&self) -> Option<RwLockWriteGuard<'_, State<K, V>>> {
        self.state.write().ok()
    }
}
