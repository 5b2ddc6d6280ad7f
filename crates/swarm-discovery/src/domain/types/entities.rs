//! Core Domain Entities for Peer Discovery

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PeerDescriptor;

/// 256-bit node identifier: the SHA-256 of an agent's opaque id string.
///
/// A coordinate in the address space, never a secret.
///
/// # Security (Timing Attack Prevention)
///
/// Equality is constant-time. Standard `PartialEq` for byte arrays
/// short-circuits on first difference.
// The manual PartialEq is constant-time; hashing the bytes stays consistent
// with it because equal NodeIds have equal bytes.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Clone, Copy, Hash)]
pub struct NodeId(pub [u8; 32]);

impl PartialEq for NodeId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let mut result = 0u8;
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            result |= a ^ b;
        }
        result == 0
    }
}

impl Eq for NodeId {}

impl NodeId {
    /// Create a NodeId from raw 32-byte array.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive the address of an agent id: `SHA-256(agent_id)`.
    pub fn from_agent_id(agent_id: &str) -> Self {
        Self(swarm_crypto::sha256(agent_id.as_bytes()))
    }

    /// Get the underlying bytes for XOR distance calculation.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The all-zero id.
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.to_hex())
    }
}

/// Short form for logs: first 8 bytes.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}

/// Unix timestamp in milliseconds.
///
/// # Security (Timestamp Bounds)
///
/// Timestamps are clamped to a reasonable maximum so a hostile clock value
/// cannot wrap staleness arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Maximum reasonable timestamp (year 9999, in milliseconds).
    pub const MAX_REASONABLE: u64 = 253_402_300_799_000;

    /// Create a new timestamp, clamping to MAX_REASONABLE.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(Self::MAX_REASONABLE))
    }

    /// Get the underlying milliseconds value.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Add milliseconds (saturating at MAX_REASONABLE).
    pub fn add_millis(&self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis).min(Self::MAX_REASONABLE))
    }

    /// Subtract milliseconds (saturating at 0).
    pub fn sub_millis(&self, millis: u64) -> Self {
        Self(self.0.saturating_sub(millis))
    }

    /// Milliseconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn millis_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// A known peer as stored in the routing table.
///
/// Created on the first announce of a `source_id`, refreshed on every later
/// one, removed by staleness eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    /// Opaque agent id the peer announced itself with.
    pub source_id: String,
    /// Human-readable name.
    pub display_name: Option<String>,
    /// Reachability hint (URL, multiaddr, ...). Not interpreted here.
    pub address: Option<String>,
    /// `SHA-256(source_id)`, the peer's coordinate.
    pub node_id: NodeId,
    /// Last announce or heartbeat.
    pub last_seen: Timestamp,
    /// Contribution counter reported by the peer.
    pub contributions: u64,
    /// Rank tier label reported by the peer.
    pub rank_tier: Option<String>,
}

impl PeerRecord {
    /// Build a fresh record from a validated descriptor.
    pub fn from_descriptor(descriptor: PeerDescriptor, now: Timestamp) -> Self {
        let node_id = NodeId::from_agent_id(descriptor.source_id());
        let PeerDescriptor {
            source_id,
            display_name,
            address,
            contributions,
            rank_tier,
        } = descriptor;

        Self {
            source_id,
            display_name,
            address,
            node_id,
            last_seen: now,
            contributions,
            rank_tier,
        }
    }

    /// Overwrite metadata from a repeat announce and mark as seen.
    pub fn refresh(&mut self, descriptor: PeerDescriptor, now: Timestamp) {
        self.display_name = descriptor.display_name;
        self.address = descriptor.address;
        self.contributions = descriptor.contributions;
        self.rank_tier = descriptor.rank_tier;
        self.last_seen = now;
    }

    /// Not seen for strictly more than `stale_after_ms`.
    pub fn is_stale(&self, now: Timestamp, stale_after_ms: u64) -> bool {
        now.millis_since(self.last_seen) > stale_after_ms
    }

    /// Public view without routing internals.
    pub fn summary(&self) -> PeerSummary {
        PeerSummary {
            source_id: self.source_id.clone(),
            display_name: self.display_name.clone(),
            address: self.address.clone(),
            last_seen: self.last_seen.as_millis(),
            contributions: self.contributions,
            rank_tier: self.rank_tier.clone(),
        }
    }
}

/// Peer as reported to status endpoints and to validator selection.
///
/// Carries no `node_id` or distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerSummary {
    /// Opaque agent id.
    pub source_id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Reachability hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Last seen, epoch milliseconds.
    pub last_seen: u64,
    /// Contribution counter.
    pub contributions: u64,
    /// Rank tier label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_tier: Option<String>,
}
