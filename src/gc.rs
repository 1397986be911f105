//! The background garbage collector.
//!
//! One collector task runs per cache instance, woken on a fixed interval to
//! sweep expired entries. It transitions Running -> Stopped exactly once,
//! either on the stop signal or when the last cache handle is dropped.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::storage::Db;

/// Spawn the collector task for `db`, sweeping every `gc_interval`.
///
/// The task stops when `true` arrives on `stop_rx` or when every sender is
/// dropped. A sweep already in progress when the signal arrives runs to
/// completion; no further sweep is scheduled after it.
pub(crate) fn spawn_collector<K, V>(
    name: String,
    db: Arc<Db<K, V>>,
    mut stop_rx: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let gc_interval = db.gc_interval();

    tokio::spawn(async move {
        debug!(
            cache = %name,
            interval_ms = gc_interval.as_millis() as u64,
            "garbage collector started"
        );

        let mut ticker = tokio::time::interval(gc_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = db.sweep(Instant::now());
                    if removed > 0 {
                        debug!(cache = %name, removed, "swept expired entries");
                    }
                }
                changed = stop_rx.changed() => {
                    // A send of `true` stops us; so does losing every sender.
                    if changed.is_err() || *stop_rx.borrow() {
                        debug!(cache = %name, "garbage collector stopped");
                        break;
                    }
                }
            }
        }
    })
}
