//! Node-level errors.

use swarm_crypto::CryptoError;
use swarm_discovery::ConfigError;
use thiserror::Error;

/// Anything that stops a node from starting.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Identity key could not be loaded or generated.
    #[error("identity key error: {0}")]
    Identity(#[from] CryptoError),

    /// `start` was called twice.
    #[error("node already started")]
    AlreadyStarted,
}
