//! Configuration for the cache.
//!
//! A cache is configured with a single TTL applied uniformly to every entry,
//! a wake interval for the background garbage collector, and an optional
//! maximum entry count.

use std::time::Duration;

use crate::error::{CacheError, CacheResult};

/// Configuration for creating a new cache instance.
///
/// The default configuration uses a 30 second TTL, a 5 second GC interval,
/// and no size bound. Setters chain for custom tuning:
///
/// ```
/// use ttl_cache::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::new()
///     .ttl(Duration::from_secs(300))
///     .gc_interval(Duration::from_secs(10))
///     .max_size(10_000);
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an entry remains until it becomes eligible for removal
    /// by the garbage collector.
    pub(crate) ttl: Duration,

    /// How regularly the garbage collector checks for expired entries.
    pub(crate) gc_interval: Duration,

    /// Maximum number of entries. When exceeded, the oldest tracked entry
    /// is removed. `0` means unlimited.
    pub(crate) max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            gc_interval: Duration::from_secs(5),
            max_size: 0,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how long entries live before the collector may remove them.
    ///
    /// Must be non-zero; construction fails otherwise.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set how often the garbage collector wakes to sweep expired entries.
    ///
    /// Must be non-zero; construction fails otherwise.
    pub fn gc_interval(mut self, interval: Duration) -> Self {
        self.gc_interval = interval;
        self
    }

    /// Set the maximum number of entries.
    ///
    /// Use `0` for unlimited. Any positive value bounds the cache: each
    /// insert that pushes the entry count past the bound removes the oldest
    /// tracked entry.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Get the configured TTL.
    pub fn get_ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the configured GC interval.
    pub fn get_gc_interval(&self) -> Duration {
        self.gc_interval
    }

    /// Get the configured maximum size (`0` = unlimited).
    pub fn get_max_size(&self) -> usize {
        self.max_size
    }

    /// Check that this configuration can produce a working cache.
    ///
    /// `max_size` is deliberately unchecked: zero already means unlimited,
    /// so every value is meaningful.
    pub(crate) fn validate(&self) -> CacheResult<()> {
        if self.ttl.is_zero() {
            return Err(CacheError::NonPositiveTtl);
        }
        if self.gc_interval.is_zero() {
            return Err(CacheError::NonPositiveGcInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(30));
        assert_eq!(config.gc_interval, Duration::from_secs(5));
        assert_eq!(config.max_size, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chained_setters() {
        let config = CacheConfig::new()
            .ttl(Duration::from_millis(200))
            .gc_interval(Duration::from_millis(50))
            .max_size(100);

        assert_eq!(config.get_ttl(), Duration::from_millis(200));
        assert_eq!(config.get_gc_interval(), Duration::from_millis(50));
        assert_eq!(config.get_max_size(), 100);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = CacheConfig::new().ttl(Duration::ZERO);
        assert_eq!(config.validate(), Err(CacheError::NonPositiveTtl));
    }

    #[test]
    fn test_zero_gc_interval_rejected() {
        let config = CacheConfig::new().gc_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(CacheError::NonPositiveGcInterval));
    }

    #[test]
    fn test_zero_max_size_is_valid() {
        let config = CacheConfig::new().max_size(0);
        assert!(config.validate().is_ok());
    }
}
