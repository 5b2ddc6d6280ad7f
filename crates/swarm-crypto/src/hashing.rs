//! # SHA-256 Hashing
//!
//! Address derivation and score normalization share one hash function so
//! that every participant computes the same coordinates and scores.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash multiple inputs as if concatenated.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// Map the first 32 bits of a digest (big-endian) onto `[0, 1]`.
pub fn normalize(digest: &Hash) -> f64 {
    let head = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(head) / f64::from(u32::MAX)
}

/// The `agent_id ":" seed` message every score is computed over.
pub fn scoring_message(agent_id: &str, seed: &str) -> Vec<u8> {
    let mut message = Vec::with_capacity(agent_id.len() + seed.len() + 1);
    message.extend_from_slice(agent_id.as_bytes());
    message.push(b':');
    message.extend_from_slice(seed.as_bytes());
    message
}

/// Hash-only score: `normalize(SHA-256(id ":" seed))`.
///
/// Anyone can recompute it, nobody can prove they computed it. Use the VRF
/// when a candidate has to attest to its own score.
pub fn hash_score(candidate_id: &str, seed: &str) -> f64 {
    normalize(&sha256(&scoring_message(candidate_id, seed)))
}
