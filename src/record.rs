//! Expiry bookkeeping records.

use std::time::Instant;

/// A single record in the expiry queue: the key and the absolute instant at
/// which its TTL elapses.
///
/// Records are appended in insertion order. With a fixed TTL and a monotonic
/// clock the queue is therefore sorted by `expires_at`, which is what allows
/// the collector to stop at the first unexpired record.
#[derive(Debug, Clone)]
pub(crate) struct ExpiryRecord<K> {
    /// The key this record tracks. The store entry may already be gone;
    /// consumers must tolerate a missing key.
    pub(crate) key: K,

    /// When the tracked entry's TTL elapses.
    pub(crate) expires_at: Instant,
}

impl<K> ExpiryRecord<K> {
    /// Create a record for `key` expiring at `expires_at`.
    pub(crate) fn new(key: K, expires_at: Instant) -> Self {
        Self { key, expires_at }
    }

    /// Whether this record's expiry lies strictly before `now`.
    ///
    /// Taking `now` as a parameter keeps the comparison testable with a
    /// controlled clock.
    pub(crate) fn expires_before(&self, now: Instant) -> bool {
        self.expires_at < now
    }
}
