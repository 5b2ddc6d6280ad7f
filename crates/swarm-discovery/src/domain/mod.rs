//! Domain Layer - Pure business logic with no I/O
//!
//! This module contains:
//! - Node identifiers and XOR distance calculation
//! - Peer descriptors validated at the announce boundary
//! - Routing table with k-buckets and staleness eviction
//! - Validator selection (hash-only and VRF-verified scoring)

pub mod routing_table;
pub mod selection;
pub mod services;
/// Core domain types (entities, values, errors)
pub mod types;

pub use routing_table::*;
pub use selection::*;
pub use services::*;
pub use types::*;
