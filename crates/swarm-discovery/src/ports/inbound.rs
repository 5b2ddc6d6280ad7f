//! # Driving Ports (Inbound API)
//!
//! The API the node and its presence/status endpoints drive.

use crate::domain::{
    AddPeerOutcome, DescriptorError, NodeId, PeerSummary, RawPeerDescriptor, RoutingTableStats,
};

/// Result of handing an announce payload to the discovery layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnounceOutcome {
    /// Descriptor was valid and reached the routing table.
    Applied(AddPeerOutcome),
    /// Descriptor was refused at the boundary; the table is untouched.
    Rejected(DescriptorError),
}

impl AnnounceOutcome {
    /// Whether the announcing peer is in the table afterwards.
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Applied(outcome) if outcome.is_stored())
    }
}

/// Primary API for interacting with the peer discovery subsystem.
///
/// Every method takes `&self`: implementations serialize mutation
/// internally, so one instance can be shared between request handlers and
/// the background eviction task.
///
/// # Example
///
/// ```rust,ignore
/// use swarm_discovery::ports::PeerDiscoveryApi;
///
/// fn status<T: PeerDiscoveryApi>(api: &T) -> String {
///     serde_json::to_string(&api.stats()).unwrap_or_default()
/// }
/// ```
pub trait PeerDiscoveryApi: Send + Sync {
    /// Record an agent announcement or heartbeat.
    ///
    /// Malformed payloads are rejected and logged, never propagated as an
    /// error: one bad announce must not disturb the table.
    fn announce(&self, descriptor: RawPeerDescriptor) -> AnnounceOutcome;

    /// Peers closest to `target` by XOR distance, closest first.
    ///
    /// Returns fewer than `count` when fewer peers are known.
    fn find_closest(&self, target: &NodeId, count: usize) -> Vec<PeerSummary>;

    /// Remove every peer past the staleness window; returns how many.
    fn evict_stale(&self) -> usize;

    /// Get current routing table statistics.
    fn stats(&self) -> RoutingTableStats;

    /// Consistent copy of every known peer.
    fn snapshot(&self) -> Vec<PeerSummary>;

    /// Remove a peer from routing table.
    fn remove_peer(&self, source_id: &str) -> bool;

    /// Update peer's last-seen timestamp (keep-alive).
    fn touch_peer(&self, source_id: &str) -> bool;

    /// Pick `n` validators among known peers for `seed` (hash-only scoring).
    fn select_validators(&self, seed: &str, n: usize) -> Vec<PeerSummary>;
}
