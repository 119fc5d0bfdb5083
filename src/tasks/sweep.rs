//! TTL Sweep Task
//!
//! Background task that periodically purges expired cache entries,
//! reclaiming keys that were written once and never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::BoundedFrequencyCache;

/// Spawns a background task that periodically purges expired entries.
///
/// The task loops on a fixed interval, independent of read/write traffic
/// and of the TTL itself. Lazy expiry on reads remains the authoritative
/// enforcement; the sweep is best-effort reclamation, so entries can live
/// slightly past their TTL between ticks.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `interval` - Time between sweep runs
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during shutdown so no
/// tick fires after the owning component is disposed.
pub fn spawn_sweep_task(
    cache: Arc<RwLock<BoundedFrequencyCache>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
