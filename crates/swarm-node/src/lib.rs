//! # Swarm Node Library
//!
//! Pieces of the node binary that tests and embedders can use directly:
//!
//! - `config` - TOML file plus environment overrides
//! - `telemetry` - tracing subscriber setup
//! - `runtime` - the `SwarmNode` lifecycle (identity, discovery, eviction)

#![warn(missing_docs)]

pub mod config;
pub mod errors;
pub mod runtime;
pub mod telemetry;

pub use config::NodeConfig;
pub use errors::NodeError;
pub use runtime::SwarmNode;
pub use telemetry::{init_tracing, TelemetryConfig, TelemetryError};
