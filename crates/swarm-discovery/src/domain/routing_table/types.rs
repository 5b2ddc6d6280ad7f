//! Results reported by routing table operations.

use serde::{Deserialize, Serialize};

/// What `add_peer` did with an announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPeerOutcome {
    /// New peer appended to the tail of its bucket.
    Inserted {
        /// Bucket the peer landed in.
        bucket: usize,
    },
    /// Known peer moved to the tail with fresh metadata.
    Refreshed {
        /// Bucket holding the peer.
        bucket: usize,
    },
    /// Bucket was full; a stale entry made room for the newcomer.
    ReplacedStale {
        /// Bucket holding the peer.
        bucket: usize,
        /// `source_id` of the evicted entry.
        evicted: String,
    },
    /// Bucket full of live peers; the newcomer was dropped.
    DroppedBucketFull {
        /// Bucket that refused the peer.
        bucket: usize,
    },
    /// The announce carried our own id.
    SelfIgnored,
}

impl AddPeerOutcome {
    /// Whether the announcing peer is in the table afterwards.
    pub fn is_stored(&self) -> bool {
        matches!(
            self,
            Self::Inserted { .. } | Self::Refreshed { .. } | Self::ReplacedStale { .. }
        )
    }
}

/// Statistics about the routing table state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingTableStats {
    /// Total number of peers in buckets
    pub total_peers: usize,
    /// Number of buckets with at least one peer
    pub buckets_used: usize,
    /// Always 256
    pub total_buckets: usize,
    /// Bucket capacity
    #[serde(rename = "K")]
    pub k: usize,
}
