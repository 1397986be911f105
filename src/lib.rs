//! # TTL Cache
//!
//! A generic, thread-safe, in-memory cache with time-based expiry and an
//! optional maximum-size bound.
//!
//! ## Features
//!
//! - **Generic**: arbitrary hashable key and cloneable value types
//! - **Thread-safe**: share across tasks and threads with `Clone` (uses `Arc`
//!   internally); reads proceed in parallel under a read/write lock
//! - **TTL expiry**: one TTL fixed at construction applies to every entry,
//!   enforced by a background garbage collector sweeping on a fixed interval
//! - **Size bound**: an optional maximum entry count, enforced inline on
//!   insert by evicting the oldest tracked entry
//! - **Statistics**: atomic counters for hits, misses, evictions, and sweeps
//!
//! ## Quick Start
//!
//! ```
//! use ttl_cache::{Cache, CacheConfig};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ttl_cache::CacheError> {
//! // Defaults: 30 second TTL, 5 second GC interval, no size bound.
//! let cache: Cache<String, String> = Cache::new("sessions", CacheConfig::default())?;
//!
//! cache.set("user:123".to_string(), "Alice".to_string());
//! assert_eq!(cache.get("user:123"), Some("Alice".to_string()));
//!
//! cache.delete("user:123");
//! assert_eq!(cache.get("user:123"), None);
//!
//! cache.stop_garbage_collection();
//! # Ok(())
//! # }
//! ```
//!
//! ## Expiry model
//!
//! Expiry is enforced by periodic sweep, not on read: an entry past its TTL
//! stays visible until the collector's next pass. The collector walks an
//! insertion-ordered expiry queue and stops at the first unexpired record,
//! so a sweep costs time proportional to what it reclaims. Deleting a key
//! leaves its expiry record behind until the next sweep; this is the
//! intended trade for O(1) deletes.
//!
//! ## Thread Safety
//!
//! Cloning a [`Cache`] creates a new handle to the same underlying data:
//!
//! ```
//! use ttl_cache::{Cache, CacheConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ttl_cache::CacheError> {
//! let cache: Cache<String, String> = Cache::new("shared", CacheConfig::default())?;
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let cache = cache.clone();
//!         std::thread::spawn(move || {
//!             cache.set(format!("key_{i}"), format!("value_{i}"));
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(cache.len(), 4);
//! cache.stop_garbage_collection();
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod stats;

pub use cache::Cache;
pub use config::CacheConfig;
pub use error::{CacheError, CacheResult};
pub use stats::{CacheStats, StatsSnapshot};

// Internal modules - not part of the public API
pub(crate) mod gc;
pub(crate) mod record;
pub(crate) mod storage;
