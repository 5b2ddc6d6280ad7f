//! # Swarm Peer Discovery & Validator Selection
//!
//! Kademlia-style routing table over `SHA-256(agent_id)` addresses, plus
//! seed-based validator selection over the peers it knows.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** XOR distance, k-buckets, routing table, descriptor
//!   validation, validator ranking
//! - **Ports Layer:** `PeerDiscoveryApi` (driving), `TimeSource` and
//!   `ConfigProvider` (driven)
//! - **Service Layer:** `PeerDiscoveryService`, the lock-guarded table shared
//!   by announce handlers and the eviction task
//! - **Adapters Layer:** system clock, static and TOML configuration
//!
//! ## Features
//!
//! - `runtime` (default) - tokio-driven periodic eviction task
//! - `toml-config` (default) - `TomlConfigProvider`
//! - `test-utils` - `FixedTimeSource`, `ManualTimeSource`
//!
//! ## Example
//!
//! ```rust
//! use swarm_discovery::{
//!     select_validators, KademliaConfig, NodeId, PeerDescriptor, RoutingTable, Timestamp,
//! };
//!
//! let mut table = RoutingTable::for_agent("agent-local", KademliaConfig::default());
//! let now = Timestamp::from_millis(1_700_000_000_000);
//!
//! for id in ["agent-a", "agent-b", "agent-c"] {
//!     table.add_peer(PeerDescriptor::new(id).unwrap(), now);
//! }
//!
//! let closest = table.find_closest(&NodeId::from_agent_id("agent-b"), 2);
//! assert_eq!(closest[0].source_id, "agent-b");
//!
//! let validators = select_validators(table.peers(), "paper-42", 2);
//! assert_eq!(validators.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test utilities (FixedTimeSource, ManualTimeSource)
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// CORE RE-EXPORTS
// =============================================================================

// Domain entities
pub use domain::{
    AddPeerOutcome, ConfigError, DescriptorError, Distance, KBucket, KademliaConfig, NodeId,
    PeerDescriptor, PeerRecord, PeerSummary, RawPeerDescriptor, RoutingTable, RoutingTableStats,
    Timestamp, NUM_BUCKETS,
};

// Domain services
pub use domain::{bucket_index, find_k_closest, node_id_for, sort_peers_by_distance, xor_distance};

// Validator selection
pub use domain::{
    select_validators, Candidate, RejectReason, Rejection, Scored, Selection, ValidatorSelector,
    VerifiedScores,
};

// Port traits
pub use ports::{AnnounceOutcome, ConfigProvider, PeerDiscoveryApi, TimeSource};

// Service
pub use service::PeerDiscoveryService;
#[cfg(feature = "runtime")]
pub use service::spawn_eviction_task;

// Adapters
pub use adapters::{StaticConfigProvider, SystemTimeSource};
#[cfg(feature = "toml-config")]
pub use adapters::TomlConfigProvider;

#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::{FixedTimeSource, ManualTimeSource};
