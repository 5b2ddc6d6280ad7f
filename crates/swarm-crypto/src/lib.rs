//! # Swarm Crypto - Agent Identity and Verifiable Scoring
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `keys` | Ed25519 (PKCS#8 / SPKI PEM) | Agent identity |
//! | `manager` | - | Holds one durable keypair per hosted agent |
//! | `hashing` | SHA-256 | Node addressing, hash-only scores |
//! | `vrf` | Ed25519 signature + SHA-256 | Publicly checkable validator scores |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, so a signature doubles as a VRF proof
//! - **Strict verification**: rejects small-order keys and malleable signatures
//! - **Typed failures**: unreadable input is an `Err`, a fraudulent proof is `Ok(false)`
//!
//! ## Example
//!
//! ```rust
//! use swarm_crypto::{vrf, KeyPair};
//!
//! let keypair = KeyPair::generate().unwrap();
//! let out = vrf::prove("agent-1", "paper-42", &keypair);
//!
//! let ok = vrf::verify("agent-1", "paper-42", out.y, &out.proof, &keypair.public_key());
//! assert_eq!(ok, Ok(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod keys;
pub mod manager;
pub mod vrf;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{hash_score, normalize, scoring_message, sha256, Hash};
pub use keys::{KeyPair, PublicKey};
pub use manager::KeyPairManager;
pub use vrf::{VrfProof, VRF_EPSILON};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
