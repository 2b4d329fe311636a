//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The first sweep runs one full `sweep_interval` after the call. Each sweep
/// takes the store's write lock once and removes every entry expired at that
/// instant.
///
/// The task exits when `true` is sent on `shutdown`, or when the sender is
/// dropped.
///
/// # Arguments
/// * `store` - shared reference to the cache store
/// * `sweep_interval` - time between sweeps, must be non-zero
/// * `shutdown` - stop signal receiver
///
/// # Example
/// ```ignore
/// let store = Arc::new(CacheStore::<String>::new());
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_sweep_task(store.clone(), Duration::from_secs(60), shutdown_rx);
/// // Later:
/// shutdown_tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_sweep_task<V>(
    store: Arc<CacheStore<V>>,
    sweep_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {:?}",
            sweep_interval
        );

        let mut ticker = interval_at(Instant::now() + sweep_interval, sweep_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.purge_expired();
                    if removed > 0 {
                        debug!(removed, remaining = store.len(), "TTL sweep removed expired entries");
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("TTL sweep task stopped");
    })
}
