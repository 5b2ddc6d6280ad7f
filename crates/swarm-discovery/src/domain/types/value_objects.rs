//! Value Objects for Peer Discovery

use super::{ConfigError, NodeId};

/// Full 256-bit XOR distance between two node ids.
///
/// Ordered as a big-endian unsigned integer, which is exactly the derived
/// lexicographic order on the byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(pub [u8; 32]);

impl Distance {
    /// `a XOR b`.
    pub fn between(a: &NodeId, b: &NodeId) -> Self {
        let mut out = [0u8; 32];
        for (o, (x, y)) in out.iter_mut().zip(a.as_bytes().iter().zip(b.as_bytes())) {
            *o = x ^ y;
        }
        Self(out)
    }

    /// Zero iff the two ids were identical.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Number of leading zero bits (256 for the zero distance).
    pub fn leading_zeros(&self) -> u32 {
        let mut zeros = 0;
        for byte in &self.0 {
            if *byte != 0 {
                return zeros + byte.leading_zeros();
            }
            zeros += 8;
        }
        zeros
    }

    /// Raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Largest representable distance.
    pub fn max() -> Self {
        Self([0xFF; 32])
    }
}

/// Routing table parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KademliaConfig {
    /// Bucket size (default: 20)
    pub k: usize,
    /// A peer not seen for longer than this is stale (default: 30 minutes)
    pub stale_after_ms: u64,
    /// Period of the background eviction sweep (default: 10 minutes)
    pub eviction_interval_secs: u64,
}

impl KademliaConfig {
    /// Default bucket size.
    pub const DEFAULT_K: usize = 20;
    /// Default staleness window.
    pub const DEFAULT_STALE_AFTER_MS: u64 = 30 * 60 * 1000;
    /// Default eviction sweep period.
    pub const DEFAULT_EVICTION_INTERVAL_SECS: u64 = 10 * 60;

    /// Create a config suitable for testing (smaller values)
    pub fn for_testing() -> Self {
        Self {
            k: 3,
            stale_after_ms: 1_000,
            eviction_interval_secs: 1,
        }
    }

    /// Reject values the routing table cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k == 0 {
            return Err(ConfigError::Invalid("k must be at least 1".to_string()));
        }
        if self.eviction_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "eviction_interval_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for KademliaConfig {
    fn default() -> Self {
        Self {
            k: Self::DEFAULT_K,
            stale_after_ms: Self::DEFAULT_STALE_AFTER_MS,
            eviction_interval_secs: Self::DEFAULT_EVICTION_INTERVAL_SECS,
        }
    }
}
