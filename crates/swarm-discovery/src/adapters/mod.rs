//! # Adapters
//!
//! Concrete implementations of the driven ports: the system clock and
//! configuration sources.

pub mod config;
pub mod time;

pub use config::StaticConfigProvider;
#[cfg(feature = "toml-config")]
pub use config::{KademliaSection, TomlConfigProvider};
pub use time::SystemTimeSource;
