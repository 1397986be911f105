//! Statistics for cache operations.
//!
//! Atomic counters tracking the cache's activity, cheap enough to record on
//! every operation. Use [`Cache::stats`](crate::Cache::stats) for a
//! point-in-time snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic operation counters shared between a cache's handles and its
/// garbage collector.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Get operations that found a key.
    hits: AtomicU64,

    /// Get operations that found nothing.
    misses: AtomicU64,

    /// Entries removed by the size bound.
    evictions: AtomicU64,

    /// Entries removed by the garbage collector.
    expirations: AtomicU64,

    /// Completed collector sweeps.
    sweeps: AtomicU64,
}

impl CacheStats {
    /// Create a stats instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_expirations(&self, count: u64) {
        self.expirations.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn record_sweep(&self) {
        self.sweeps.fetch_add(1, Ordering::Relaxed);
    }

    /// Get operations that found a key.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Get operations that found nothing.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Entries removed because the size bound was exceeded.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Entries removed by the garbage collector after TTL elapsed.
    pub fn expirations(&self) -> u64 {
        self.expirations.load(Ordering::Relaxed)
    }

    /// Number of completed collector sweeps.
    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }

    /// Hit rate as a percentage, `0.0` when no gets have been recorded.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }

    /// Create a plain-value snapshot of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits(),
            misses: self.misses(),
            evictions: self.evictions(),
            expirations: self.expirations(),
            sweeps: self.sweeps(),
            hit_rate: self.hit_rate(),
        }
    }
}

/// A point-in-time snapshot of cache statistics.
///
/// Unlike [`CacheStats`] this holds plain values, so it can be logged or
/// compared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub sweeps: u64,
    pub hit_rate: f64,
}
