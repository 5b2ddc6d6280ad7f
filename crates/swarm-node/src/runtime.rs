//! Node lifecycle.
//!
//! A `SwarmNode` owns everything one agent needs for discovery and
//! selection: its routing table service, its identity keys, and the
//! background eviction task. Nothing here is process-global; tests can run
//! several nodes side by side.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use swarm_crypto::{KeyPairManager, PublicKey, VrfProof};
use swarm_discovery::{
    spawn_eviction_task, AnnounceOutcome, PeerDiscoveryApi, PeerDiscoveryService, PeerSummary,
    RawPeerDescriptor, TimeSource,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::NodeConfig;
use crate::errors::NodeError;

/// How long `shutdown` waits for background tasks to finish.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// One running swarm agent.
pub struct SwarmNode {
    config: NodeConfig,
    service: Arc<PeerDiscoveryService>,
    keys: Arc<KeyPairManager>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver.
    shutdown_rx: watch::Receiver<bool>,
    eviction_task: Mutex<Option<JoinHandle<()>>>,
}

impl SwarmNode {
    /// Build the node and load or create its identity.
    pub fn new(config: NodeConfig, time_source: Arc<dyn TimeSource>) -> Result<Self, NodeError> {
        config.validate()?;
        info!(agent_id = %config.agent_id, "Creating swarm node");

        let keys = Arc::new(KeyPairManager::new());
        let public_key = match &config.key_file {
            Some(path) => {
                let pem = fs::read_to_string(path).map_err(|e| swarm_discovery::ConfigError::Io {
                    path: path.display().to_string(),
                    error: e.to_string(),
                })?;
                let key = keys.import_pem(&config.agent_id, &pem)?;
                info!(path = %path.display(), "Identity key loaded");
                key
            }
            None => {
                warn!("No key_file configured; using an ephemeral identity");
                keys.generate_for(&config.agent_id)?
            }
        };
        info!(public_key = %hex_prefix(&public_key), "Identity ready");

        let service = Arc::new(PeerDiscoveryService::from_provider(
            &config.agent_id,
            &config,
            time_source,
        ));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            service,
            keys,
            shutdown_tx,
            shutdown_rx,
            eviction_task: Mutex::new(None),
        })
    }

    /// Start background tasks. Must be called inside a tokio runtime.
    pub fn start(&self) -> Result<(), NodeError> {
        let mut slot = self.eviction_task.lock();
        if slot.is_some() {
            return Err(NodeError::AlreadyStarted);
        }

        let period = self.config.eviction_interval();
        *slot = Some(spawn_eviction_task(
            Arc::clone(&self.service),
            period,
            self.shutdown_rx.clone(),
        ));
        info!(
            agent_id = %self.config.agent_id,
            eviction_interval_secs = period.as_secs(),
            "Swarm node started"
        );
        Ok(())
    }

    /// Signal background tasks to stop and wait for them.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        let task = self.eviction_task.lock().take();
        if let Some(task) = task {
            match tokio::time::timeout(SHUTDOWN_GRACE, task).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("Eviction task failed: {}", e),
                Err(_) => warn!("Eviction task did not stop in time"),
            }
        }

        info!("Shutdown complete");
    }

    /// Node configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Shared discovery service, for request handlers.
    pub fn service(&self) -> Arc<PeerDiscoveryService> {
        Arc::clone(&self.service)
    }

    /// Identity keys held by this node.
    pub fn keys(&self) -> Arc<KeyPairManager> {
        Arc::clone(&self.keys)
    }

    /// Our public key.
    pub fn public_key(&self) -> Result<PublicKey, NodeError> {
        self.keys
            .public_key(&self.config.agent_id)
            .ok_or_else(|| swarm_crypto::CryptoError::UnknownAgent(self.config.agent_id.clone()).into())
    }

    /// Our SPKI PEM public key, for publishing to peers.
    pub fn public_key_pem(&self) -> Result<String, NodeError> {
        Ok(self.keys.export_public_pem(&self.config.agent_id)?)
    }

    /// Our VRF score and proof for `seed`.
    pub fn prove(&self, seed: &str) -> Result<VrfProof, NodeError> {
        Ok(self.keys.prove(&self.config.agent_id, seed)?)
    }

    /// Announce payload describing this node.
    pub fn self_descriptor(&self) -> RawPeerDescriptor {
        RawPeerDescriptor {
            source_id: Some(self.config.agent_id.clone()),
            display_name: self.config.display_name.clone(),
            address: self.config.address.clone(),
            ..RawPeerDescriptor::default()
        }
    }

    /// Record an announce from another agent.
    pub fn handle_announce(&self, descriptor: RawPeerDescriptor) -> AnnounceOutcome {
        self.service.announce(descriptor)
    }

    /// Hash-only validator selection over known peers.
    pub fn select_validators(&self, seed: &str, n: usize) -> Vec<PeerSummary> {
        self.service.select_validators(seed, n)
    }
}

impl std::fmt::Debug for SwarmNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmNode")
            .field("agent_id", &self.config.agent_id)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

fn hex_prefix(key: &PublicKey) -> String {
    hex::encode(&key.to_bytes()[..8])
}
