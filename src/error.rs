//! Error types for the cache library.
//!
//! The only fallible operation is construction: a cache built from an
//! unusable configuration is rejected up front instead of misbehaving later.
//! All other operations are infallible by contract.

use std::fmt;

/// The error type for cache construction.
///
/// Returned by [`Cache::new`](crate::Cache::new) when the supplied
/// configuration cannot produce a working cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The configured TTL was zero; every entry would expire immediately.
    NonPositiveTtl,

    /// The configured GC interval was zero; the collector cannot be scheduled.
    NonPositiveGcInterval,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::NonPositiveTtl => {
                write!(f, "invalid cache config: non-positive ttl")
            }
            CacheError::NonPositiveGcInterval => {
                write!(f, "invalid cache config: non-positive gc interval")
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// A specialized Result type for cache construction.
pub type CacheResult<T> = Result<T, CacheError>;
