use crate::domain::{NodeId, PeerSummary, RawPeerDescriptor, RoutingTableStats, ValidatorSelector};
use crate::ports::{AnnounceOutcome, PeerDiscoveryApi};
use crate::service::PeerDiscoveryService;

impl PeerDiscoveryApi for PeerDiscoveryService {
    fn announce(&self, descriptor: RawPeerDescriptor) -> AnnounceOutcome {
        self.announce_raw(descriptor)
    }

    fn find_closest(&self, target: &NodeId, count: usize) -> Vec<PeerSummary> {
        self.routing_table.lock().find_closest(target, count)
    }

    fn evict_stale(&self) -> usize {
        let now = self.now();
        self.routing_table.lock().evict_stale(now)
    }

    fn stats(&self) -> RoutingTableStats {
        self.routing_table.lock().stats()
    }

    fn snapshot(&self) -> Vec<PeerSummary> {
        self.routing_table.lock().peers()
    }

    fn remove_peer(&self, source_id: &str) -> bool {
        self.routing_table.lock().remove_peer(source_id)
    }

    fn touch_peer(&self, source_id: &str) -> bool {
        let now = self.now();
        self.routing_table.lock().touch_peer(source_id, now)
    }

    fn select_validators(&self, seed: &str, n: usize) -> Vec<PeerSummary> {
        self.select_with(&ValidatorSelector::hash_only(), seed, n)
            .into_candidates()
    }
}
