//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheRegion;

/// Spawns a background task that periodically drops expired entries from a
/// cache region.
///
/// Expired entries are already treated as misses on read; this only keeps
/// them from occupying memory and LRU slots.
///
/// # Arguments
/// * `region` - Cache region to sweep (clones share storage)
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(region: CacheRegion, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            region = region.name(),
            "Starting TTL cleanup task with interval of {} seconds", cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = region.cleanup_expired().await;

            if removed > 0 {
                info!(region = region.name(), "TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!(region = region.name(), "TTL cleanup: no expired entries found");
            }
        }
    })
}
