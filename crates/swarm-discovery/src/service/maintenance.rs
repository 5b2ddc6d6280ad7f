use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::ports::PeerDiscoveryApi;
use crate::service::PeerDiscoveryService;

impl PeerDiscoveryService {
    /// Period configured for the background sweep.
    pub fn eviction_interval(&self) -> Duration {
        Duration::from_secs(self.config().eviction_interval_secs)
    }
}

/// Run staleness eviction every `period` until `shutdown` flips to `true`
/// or its sender is dropped.
///
/// The first sweep happens one full period after spawning. Each sweep takes
/// the same lock as `announce`, so an insertion never races an eviction.
pub fn spawn_eviction_task(
    service: Arc<PeerDiscoveryService>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval() fires immediately; skip it.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let evicted = service.evict_stale();
                    if evicted > 0 {
                        info!(evicted, remaining = service.stats().total_peers, "Stale peers evicted");
                    } else {
                        debug!("Eviction sweep found nothing stale");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Eviction task shutting down");
                        break;
                    }
                }
            }
        }
    })
}
