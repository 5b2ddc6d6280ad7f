//! Routing Table Implementation
//!
//! Kademlia k-bucket table over the 256-bit address space. Buckets are
//! ordered by recency (least recently seen at the head) and never grow past K.

// Semantic submodules
mod bucket;
mod config;
mod table;
mod types;

// Re-export public API
pub use bucket::KBucket;
pub use config::NUM_BUCKETS;
pub use table::RoutingTable;
pub use types::{AddPeerOutcome, RoutingTableStats};
