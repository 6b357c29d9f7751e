//! Expiry Sweep Task
//!
//! Background task that periodically removes expired charts.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedChartCache;

/// Spawns a background task that periodically sweeps expired charts.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Reads already treat expired entries as absent; the sweep only
/// reclaims the memory of entries nobody asks for again.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = SharedChartCache::with_limits(1000, 3600)?;
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: SharedChartCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting chart cache sweep with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("Chart cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Chart cache sweep: no expired entries found");
            }
        }
    })
}
