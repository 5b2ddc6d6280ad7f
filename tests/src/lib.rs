//! # Validation Swarm Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (routing table, VRF)
//! └── src/
//!     └── integration/  # Node-to-node announce and selection flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p swarm-tests
//!
//! # By flow
//! cargo test -p swarm-tests integration::announce_flow
//! cargo test -p swarm-tests integration::selection_flow
//!
//! # Benchmarks
//! cargo bench -p swarm-tests
//! ```

pub mod integration;
