//! Test utilities for peer discovery.
//!
//! Time sources for deterministic tests. Enable with the `test-utils`
//! feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_discovery::test_utils::ManualTimeSource;
//! use swarm_discovery::TimeSource;
//!
//! let clock = ManualTimeSource::new(1_000);
//! clock.advance(500);
//! assert_eq!(clock.now().as_millis(), 1_500);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::Timestamp;
use crate::ports::outbound::TimeSource;

/// A time source that returns a fixed timestamp.
///
/// # Example
///
/// ```rust,ignore
/// use swarm_discovery::test_utils::FixedTimeSource;
/// use swarm_discovery::TimeSource;
///
/// let time = FixedTimeSource::new(12345);
/// assert_eq!(time.now().as_millis(), 12345);
/// ```
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    timestamp: u64,
}

impl FixedTimeSource {
    /// Create a new fixed time source with the given timestamp (in milliseconds).
    pub fn new(timestamp: u64) -> Self {
        Self { timestamp }
    }

    /// Get the configured timestamp value.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.timestamp)
    }
}

/// Simulated clock that only moves when told to.
///
/// Shared through an `Arc` between the code under test and the test body.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    millis: AtomicU64,
}

impl ManualTimeSource {
    /// Start the clock at `millis`.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jump to an absolute time.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.load(Ordering::SeqCst))
    }
}
