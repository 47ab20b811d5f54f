//! Cache Stats Monitor
//!
//! Background task that periodically reports cache entry counts.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::data::DataAccess;

/// Spawns a background task that logs cache stats every `interval_secs`.
///
/// The task only reads stats; it never evicts, so expired entries stay
/// counted until a read touches them.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_stats_monitor(data: DataAccess, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting cache stats monitor with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let stats = data.get_cache_stats().await;
            if stats.total > 0 {
                info!(
                    total = stats.total,
                    valid = stats.valid,
                    expired = stats.expired,
                    "cache stats"
                );
            } else {
                debug!("cache stats: empty");
            }
        }
    })
}
