//! TTL Sweep Task
//!
//! Background task that periodically removes expired responses, bounding
//! memory for URLs that are fetched once and never read again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::fetch::ResponseCache;

/// Spawns a background task that periodically sweeps the response cache.
///
/// The task sleeps for `interval` between runs and holds the write lock only
/// for the duration of the sweep.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(fetch.cache(), CLEANUP_INTERVAL);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: ResponseCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting response cache sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.cleanup();

            if removed > 0 {
                info!("Cache sweep: removed {} expired responses", removed);
            } else {
                debug!("Cache sweep: no expired responses found");
            }
        }
    })
}
