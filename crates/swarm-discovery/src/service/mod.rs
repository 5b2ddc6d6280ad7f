//! # Peer Discovery Service
//!
//! High-level service implementing the `PeerDiscoveryApi` port.
//!
//! Wraps the domain `RoutingTable` behind a mutex so announce handlers, status
//! endpoints and the periodic eviction task can share one instance. Time comes
//! from an injected `TimeSource`.

// Semantic submodules
mod api;
mod core;
#[cfg(feature = "runtime")]
mod maintenance;

// Re-export public API
pub use core::PeerDiscoveryService;
#[cfg(feature = "runtime")]
pub use maintenance::spawn_eviction_task;
