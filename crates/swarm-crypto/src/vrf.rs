//! # Verifiable Random Function
//!
//! Signature-based VRF over Ed25519.
//!
//! ```text
//! message = agent_id ":" seed
//! proof   = Sign(private_key, message)          (64 bytes, deterministic)
//! y       = first32Bits(SHA-256(proof)) / 2^32-1 (in [0, 1])
//! ```
//!
//! Any holder of the public key can check a claimed `(y, proof)` without the
//! private key. The seed must come from somewhere the candidate could not
//! choose, e.g. a not-yet-known block hash; this module does not and cannot
//! enforce that.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hashing::{normalize, scoring_message, sha256};
use crate::keys::{KeyPair, PublicKey};
use crate::CryptoError;

/// Tolerance when comparing a claimed `y` against the recomputed one.
pub const VRF_EPSILON: f64 = 1e-9;

/// Output of [`prove`]: the score and the proof that backs it.
///
/// Serializes as `{"y": 0.42, "proof": "<base64>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrfProof {
    /// Pseudorandom score in `[0, 1]`.
    pub y: f64,
    /// Ed25519 signature over `agent_id ":" seed`.
    #[serde(serialize_with = "encode_proof", deserialize_with = "decode_proof")]
    pub proof: Vec<u8>,
}

fn encode_proof<S: Serializer>(proof: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(proof))
}

fn decode_proof<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    STANDARD.decode(encoded).map_err(serde::de::Error::custom)
}

impl VrfProof {
    /// Base64 form of the proof bytes, as carried over JSON.
    pub fn proof_base64(&self) -> String {
        STANDARD.encode(&self.proof)
    }

    /// Rebuild from the JSON transport fields.
    pub fn from_base64(y: f64, proof: &str) -> Result<Self, CryptoError> {
        let proof = STANDARD
            .decode(proof)
            .map_err(|e| CryptoError::InvalidSignatureFormat(e.to_string()))?;
        Ok(Self { y, proof })
    }
}

/// Derive `y` from proof bytes.
pub fn output_from_proof(proof: &[u8]) -> f64 {
    normalize(&sha256(proof))
}

/// Produce the score and proof for `agent_id` under `seed`.
///
/// Reproducible: identical inputs always yield identical `(y, proof)`.
pub fn prove(agent_id: &str, seed: &str, keypair: &KeyPair) -> VrfProof {
    let message = scoring_message(agent_id, seed);
    let proof = keypair.sign(&message).to_vec();
    let y = output_from_proof(&proof);

    VrfProof { y, proof }
}

/// [`prove`] with the private key supplied as a PKCS#8 PEM document.
pub fn prove_with_pem(agent_id: &str, seed: &str, private_pem: &str) -> Result<VrfProof, CryptoError> {
    let keypair = KeyPair::from_pem(private_pem)?;
    Ok(prove(agent_id, seed, &keypair))
}

/// Check a claimed `(y, proof)` for `agent_id` under `seed`.
///
/// # Returns
///
/// - `Ok(true)` if the signature verifies and `y` matches within [`VRF_EPSILON`]
/// - `Ok(false)` if the proof is well-formed but fraudulent
/// - `Err(_)` if the proof or `y` cannot be read at all
pub fn verify(
    agent_id: &str,
    seed: &str,
    y: f64,
    proof: &[u8],
    public_key: &PublicKey,
) -> Result<bool, CryptoError> {
    if !(0.0..=1.0).contains(&y) {
        return Err(CryptoError::InvalidInput(format!("score outside [0, 1]: {}", y)));
    }

    let message = scoring_message(agent_id, seed);
    if !public_key.verify(&message, proof)? {
        tracing::debug!(agent_id, seed, "VRF signature rejected");
        return Ok(false);
    }

    let expected = output_from_proof(proof);
    let matches = (y - expected).abs() < VRF_EPSILON;
    if !matches {
        tracing::debug!(agent_id, seed, claimed = y, expected, "VRF output mismatch");
    }
    Ok(matches)
}

/// [`verify`] over the transport forms: a [`VrfProof`] and a SPKI PEM key.
pub fn verify_encoded(
    agent_id: &str,
    seed: &str,
    claim: &VrfProof,
    public_pem: &str,
) -> Result<bool, CryptoError> {
    let public_key = PublicKey::from_pem(public_pem)?;
    verify(agent_id, seed, claim.y, &claim.proof, &public_key)
}
