//! Main RoutingTable implementation.

use tracing::debug;

use crate::domain::{
    bucket_index, find_k_closest, KademliaConfig, NodeId, PeerDescriptor, PeerRecord,
    PeerSummary, Timestamp,
};

use super::bucket::KBucket;
use super::config::NUM_BUCKETS;
use super::types::{AddPeerOutcome, RoutingTableStats};

/// The main routing table implementing Kademlia DHT
///
/// # Invariants
/// - Exactly 256 buckets, indexed by leading zero bits of `local XOR peer`.
/// - No bucket holds more than `config.k` peers.
/// - The local node id is never stored.
///
/// The table is a plain single-writer value. Callers sharing it across
/// threads wrap it in a lock (see `PeerDiscoveryService`).
#[derive(Debug)]
pub struct RoutingTable {
    /// Our own node ID (immutable after creation)
    local_node_id: NodeId,
    /// 256 k-buckets, one for each possible XOR distance
    buckets: Vec<KBucket>,
    config: KademliaConfig,
}

impl RoutingTable {
    /// Create a new routing table
    pub fn new(local_node_id: NodeId, config: KademliaConfig) -> Self {
        let buckets = (0..NUM_BUCKETS).map(|_| KBucket::new()).collect();

        Self {
            local_node_id,
            buckets,
            config,
        }
    }

    /// Create a routing table centred on `SHA-256(agent_id)`
    pub fn for_agent(agent_id: &str, config: KademliaConfig) -> Self {
        Self::new(NodeId::from_agent_id(agent_id), config)
    }

    /// Get our local node ID
    pub fn local_node_id(&self) -> &NodeId {
        &self.local_node_id
    }

    /// Get the configuration
    pub fn config(&self) -> &KademliaConfig {
        &self.config
    }

    /// Get total peer count across all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    /// Most peers the table can hold: K per bucket.
    pub fn capacity(&self) -> usize {
        NUM_BUCKETS * self.config.k
    }

    /// No peers known
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.is_empty())
    }

    /// Record an announce.
    ///
    /// Known peers are refreshed and moved to the tail of their bucket. New
    /// peers are appended while the bucket has room. A full bucket admits a
    /// newcomer only by replacing its first stale entry; live contacts are
    /// never displaced.
    pub fn add_peer(&mut self, descriptor: PeerDescriptor, now: Timestamp) -> AddPeerOutcome {
        let peer_id = NodeId::from_agent_id(descriptor.source_id());
        let Some(index) = bucket_index(&self.local_node_id, &peer_id) else {
            debug!(source_id = descriptor.source_id(), "ignoring announce of local node");
            return AddPeerOutcome::SelfIgnored;
        };

        let k = self.config.k;
        let stale_after_ms = self.config.stale_after_ms;
        let bucket = &mut self.buckets[index];

        if let Some(pos) = bucket.position(descriptor.source_id()) {
            bucket.refresh_at(pos, descriptor, now);
            return AddPeerOutcome::Refreshed { bucket: index };
        }

        let peer = PeerRecord::from_descriptor(descriptor, now);

        if !bucket.is_full(k) {
            debug!(source_id = %peer.source_id, bucket = index, "peer inserted");
            bucket.push(peer, now);
            return AddPeerOutcome::Inserted { bucket: index };
        }

        match bucket.first_stale_position(now, stale_after_ms) {
            Some(pos) => {
                let source_id = peer.source_id.clone();
                let evicted = bucket.replace_at(pos, peer, now);
                debug!(
                    source_id = %source_id,
                    evicted = %evicted.source_id,
                    bucket = index,
                    "stale peer replaced"
                );
                AddPeerOutcome::ReplacedStale {
                    bucket: index,
                    evicted: evicted.source_id,
                }
            }
            None => {
                debug!(source_id = %peer.source_id, bucket = index, "bucket full, peer dropped");
                AddPeerOutcome::DroppedBucketFull { bucket: index }
            }
        }
    }

    /// Up to `count` peers ordered by XOR distance to `target`, closest first.
    pub fn find_closest(&self, target: &NodeId, count: usize) -> Vec<PeerSummary> {
        find_k_closest(self.records(), target, count)
            .into_iter()
            .map(PeerRecord::summary)
            .collect()
    }

    /// Remove every peer not seen within the staleness window.
    pub fn evict_stale(&mut self, now: Timestamp) -> usize {
        let stale_after_ms = self.config.stale_after_ms;
        let evicted: usize = self
            .buckets
            .iter_mut()
            .map(|b| b.evict_stale(now, stale_after_ms))
            .sum();

        if evicted > 0 {
            debug!(evicted, remaining = self.len(), "stale peers evicted");
        }
        evicted
    }

    /// Get routing table statistics
    pub fn stats(&self) -> RoutingTableStats {
        RoutingTableStats {
            total_peers: self.len(),
            buckets_used: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            total_buckets: NUM_BUCKETS,
            k: self.config.k,
        }
    }

    /// Look up a peer by the id it announced with
    pub fn get_peer(&self, source_id: &str) -> Option<&PeerRecord> {
        let index = self.bucket_for(source_id)?;
        self.buckets[index].get(source_id)
    }

    /// Remove a peer from the routing table
    pub fn remove_peer(&mut self, source_id: &str) -> bool {
        let Some(index) = self.bucket_for(source_id) else {
            return false;
        };
        self.buckets[index].remove_peer(source_id).is_some()
    }

    /// Touch a peer (update last_seen and move it to the tail)
    pub fn touch_peer(&mut self, source_id: &str, now: Timestamp) -> bool {
        let Some(index) = self.bucket_for(source_id) else {
            return false;
        };
        self.buckets[index].touch_peer(source_id, now)
    }

    /// Summaries of every known peer, in bucket order
    pub fn peers(&self) -> Vec<PeerSummary> {
        self.records().map(PeerRecord::summary).collect()
    }

    /// Every stored record, in bucket order
    pub fn records(&self) -> impl Iterator<Item = &PeerRecord> + '_ {
        self.buckets.iter().flat_map(|b| b.peers().iter())
    }

    /// Get a reference to a bucket by index
    pub fn bucket(&self, index: usize) -> Option<&KBucket> {
        self.buckets.get(index)
    }

    fn bucket_for(&self, source_id: &str) -> Option<usize> {
        bucket_index(&self.local_node_id, &NodeId::from_agent_id(source_id))
    }
}
