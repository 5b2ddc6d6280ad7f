use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::{
    AddPeerOutcome, KademliaConfig, NodeId, PeerDescriptor, PeerSummary,
    RawPeerDescriptor, RoutingTable, Selection, Timestamp, ValidatorSelector,
};
use crate::ports::{AnnounceOutcome, ConfigProvider, TimeSource};

/// Peer Discovery Service implementing the driving port.
///
/// Every operation takes `&self` and runs under one lock, so insertions from
/// request handlers and timer-driven eviction never interleave inside a
/// bucket. Reads clone what they need while holding the lock.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use swarm_discovery::adapters::SystemTimeSource;
/// use swarm_discovery::domain::KademliaConfig;
/// use swarm_discovery::ports::PeerDiscoveryApi;
/// use swarm_discovery::service::PeerDiscoveryService;
///
/// let service = PeerDiscoveryService::for_agent(
///     "agent-local",
///     KademliaConfig::default(),
///     Arc::new(SystemTimeSource::new()),
/// );
/// let stats = service.stats();
/// ```
pub struct PeerDiscoveryService {
    /// The underlying routing table (domain layer)
    pub(crate) routing_table: Mutex<RoutingTable>,
    /// Time source for operations requiring timestamps
    pub(crate) time_source: Arc<dyn TimeSource>,
}

impl PeerDiscoveryService {
    /// Create a new peer discovery service.
    ///
    /// # Arguments
    ///
    /// * `local_node_id` - Our own node ID
    /// * `config` - Kademlia configuration
    /// * `time_source` - Provider for current time
    pub fn new(
        local_node_id: NodeId,
        config: KademliaConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            routing_table: Mutex::new(RoutingTable::new(local_node_id, config)),
            time_source,
        }
    }

    /// Service centred on `SHA-256(agent_id)`.
    pub fn for_agent(
        agent_id: &str,
        config: KademliaConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> Self {
        Self::new(NodeId::from_agent_id(agent_id), config, time_source)
    }

    /// Service centred on `SHA-256(agent_id)`, configured from `provider`.
    pub fn from_provider(
        agent_id: &str,
        provider: &dyn ConfigProvider,
        time_source: Arc<dyn TimeSource>,
    ) -> Self {
        Self::for_agent(agent_id, provider.get_kademlia_config(), time_source)
    }

    /// Get the current timestamp from the time source.
    pub(crate) fn now(&self) -> Timestamp {
        self.time_source.now()
    }

    /// Our own node ID.
    pub fn local_node_id(&self) -> NodeId {
        *self.routing_table.lock().local_node_id()
    }

    /// Active configuration.
    pub fn config(&self) -> KademliaConfig {
        self.routing_table.lock().config().clone()
    }

    /// Run `f` with the table locked. Keep `f` short: it blocks every writer.
    pub fn with_table<R>(&self, f: impl FnOnce(&RoutingTable) -> R) -> R {
        f(&self.routing_table.lock())
    }

    /// Validate a raw announce and apply it.
    pub fn announce_raw(&self, raw: RawPeerDescriptor) -> AnnounceOutcome {
        match PeerDescriptor::try_from(raw) {
            Ok(descriptor) => AnnounceOutcome::Applied(self.add_peer(descriptor)),
            Err(e) => {
                warn!(error = %e, "peer announce rejected");
                AnnounceOutcome::Rejected(e)
            }
        }
    }

    /// Parse a JSON announce payload and apply it.
    pub fn announce_json(&self, payload: &str) -> AnnounceOutcome {
        match PeerDescriptor::from_json(payload) {
            Ok(descriptor) => AnnounceOutcome::Applied(self.add_peer(descriptor)),
            Err(e) => {
                warn!(error = %e, "peer announce rejected");
                AnnounceOutcome::Rejected(e)
            }
        }
    }

    /// Apply an already-validated descriptor.
    pub fn add_peer(&self, descriptor: PeerDescriptor) -> AddPeerOutcome {
        let now = self.now();
        let outcome = self.routing_table.lock().add_peer(descriptor, now);
        if let AddPeerOutcome::DroppedBucketFull { bucket } = outcome {
            debug!(bucket, "announce dropped, bucket full of live peers");
        }
        outcome
    }

    /// Closest peers to `SHA-256(agent_id)`.
    pub fn find_closest_to_agent(&self, agent_id: &str, count: usize) -> Vec<PeerSummary> {
        self.routing_table
            .lock()
            .find_closest(&NodeId::from_agent_id(agent_id), count)
    }

    /// Rank a snapshot of known peers with a caller-supplied selector.
    ///
    /// The lock is released before scoring, so VRF verification never
    /// blocks announces.
    pub fn select_with(&self, selector: &ValidatorSelector, seed: &str, n: usize) -> Selection<PeerSummary> {
        let candidates = self.routing_table.lock().peers();
        selector.select(candidates, seed, n)
    }

    /// Whether `source_id` is currently in the table.
    pub fn contains(&self, source_id: &str) -> bool {
        self.routing_table.lock().get_peer(source_id).is_some()
    }

    /// Current summary of one peer.
    pub fn get_peer(&self, source_id: &str) -> Option<PeerSummary> {
        self.routing_table
            .lock()
            .get_peer(source_id)
            .map(|p| p.summary())
    }
}

impl std::fmt::Debug for PeerDiscoveryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = self.routing_table.lock();
        f.debug_struct("PeerDiscoveryService")
            .field("local_node_id", table.local_node_id())
            .field("peers", &table.len())
            .finish_non_exhaustive()
    }
}

