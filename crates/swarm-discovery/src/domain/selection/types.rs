//! Selection results.

use swarm_crypto::CryptoError;
use thiserror::Error;

use super::Candidate;

/// A candidate together with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<C> {
    /// The ranked candidate
    pub candidate: C,
    /// Score in `[0, 1]`
    pub score: f64,
}

/// Why a candidate was left out of a verified selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// No public key registered for this id.
    #[error("no public key registered")]
    UnknownIdentity,

    /// Key is known but no proof was submitted for this round.
    #[error("no VRF proof submitted")]
    MissingProof,

    /// Proof is well-formed but does not check out.
    #[error("VRF proof failed verification")]
    VerificationFailed,

    /// Proof or score could not be read at all.
    #[error("unreadable VRF proof: {0}")]
    Unreadable(CryptoError),
}

/// A candidate excluded from a selection, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Id of the excluded candidate
    pub candidate_id: String,
    /// Reason it was excluded
    pub reason: RejectReason,
}

/// Output of one selection round.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<C> {
    /// Chosen validators, highest score first
    pub validators: Vec<Scored<C>>,
    /// Candidates that could not be scored
    pub rejected: Vec<Rejection>,
}

impl<C> Selection<C> {
    /// Number of chosen validators
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Nobody was chosen
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Drop the scores, keeping rank order.
    pub fn into_candidates(self) -> Vec<C> {
        self.validators.into_iter().map(|s| s.candidate).collect()
    }
}

impl<C: Candidate> Selection<C> {
    /// Ids of the chosen validators in rank order
    pub fn ids(&self) -> Vec<&str> {
        self.validators
            .iter()
            .map(|s| s.candidate.candidate_id())
            .collect()
    }
}
