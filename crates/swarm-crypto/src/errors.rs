//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// These are reported when input cannot be read or a primitive is
/// unavailable. A well-formed proof that simply does not check out is not
/// an error: `vrf::verify` returns `Ok(false)` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid signature format (wrong length, undecodable encoding)
    #[error("Invalid signature format: {0}")]
    InvalidSignatureFormat(String),

    /// Invalid public key
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Key encoding failed
    #[error("Key encoding failed: {0}")]
    EncodingFailed(String),

    /// No key is held for the requested agent
    #[error("No keypair held for agent {0}")]
    UnknownAgent(String),

    /// Invalid input for cryptographic operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
