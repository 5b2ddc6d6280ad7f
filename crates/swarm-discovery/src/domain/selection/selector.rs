//! Scoring and ranking.

use std::collections::HashMap;

use swarm_crypto::{hash_score, vrf, CryptoError, KeyPairManager, PublicKey, VrfProof};
use tracing::{debug, warn};

use super::types::{RejectReason, Rejection, Scored, Selection};
use super::Candidate;

/// Public keys and per-round VRF claims for verified selection.
///
/// Keys are long-lived and should be registered before the round's seed is
/// published. Claims are per seed: a proof made for another seed fails
/// verification.
#[derive(Debug, Clone, Default)]
pub struct VerifiedScores {
    public_keys: HashMap<String, PublicKey>,
    claims: HashMap<String, VrfProof>,
}

impl VerifiedScores {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an agent's public key.
    pub fn register_key(&mut self, agent_id: impl Into<String>, public_key: PublicKey) {
        self.public_keys.insert(agent_id.into(), public_key);
    }

    /// Register an agent's public key from SPKI PEM.
    pub fn register_pem(&mut self, agent_id: impl Into<String>, public_pem: &str) -> Result<(), CryptoError> {
        let public_key = PublicKey::from_pem(public_pem)?;
        self.register_key(agent_id, public_key);
        Ok(())
    }

    /// Record an agent's claimed VRF output for this round.
    pub fn submit_claim(&mut self, agent_id: impl Into<String>, claim: VrfProof) {
        self.claims.insert(agent_id.into(), claim);
    }

    /// Register keys and proofs for agents whose keypairs live in `manager`.
    ///
    /// Fails with `CryptoError::UnknownAgent` if any id has no keypair.
    pub fn collect_local<I, S>(manager: &KeyPairManager, agent_ids: I, seed: &str) -> Result<Self, CryptoError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scores = Self::new();
        for agent_id in agent_ids {
            let agent_id = agent_id.as_ref();
            let public_key = manager
                .public_key(agent_id)
                .ok_or_else(|| CryptoError::UnknownAgent(agent_id.to_string()))?;
            let claim = manager.prove(agent_id, seed)?;
            scores.register_key(agent_id, public_key);
            scores.submit_claim(agent_id, claim);
        }
        Ok(scores)
    }

    /// Public key registered for `agent_id`
    pub fn public_key(&self, agent_id: &str) -> Option<&PublicKey> {
        self.public_keys.get(agent_id)
    }

    /// Claim submitted by `agent_id`
    pub fn claim(&self, agent_id: &str) -> Option<&VrfProof> {
        self.claims.get(agent_id)
    }

    /// Forget every claim, keeping registered keys for the next round.
    pub fn clear_claims(&mut self) {
        self.claims.clear();
    }

    fn score(&self, agent_id: &str, seed: &str) -> Result<f64, RejectReason> {
        let public_key = self
            .public_keys
            .get(agent_id)
            .ok_or(RejectReason::UnknownIdentity)?;
        let claim = self.claims.get(agent_id).ok_or(RejectReason::MissingProof)?;

        // Rank by the output the proof yields; the claimed `y` only has to
        // agree with it within VRF_EPSILON.
        match vrf::verify(agent_id, seed, claim.y, &claim.proof, public_key) {
            Ok(true) => Ok(vrf::output_from_proof(&claim.proof)),
            Ok(false) => Err(RejectReason::VerificationFailed),
            Err(e) => Err(RejectReason::Unreadable(e)),
        }
    }
}

#[derive(Debug, Clone)]
enum ScoringMode {
    HashOnly,
    Verified(VerifiedScores),
}

/// Picks the top-N candidates for a seed.
///
/// Stateless apart from the verified-mode registry, so one selector can be
/// shared across threads and called concurrently.
#[derive(Debug, Clone)]
pub struct ValidatorSelector {
    mode: ScoringMode,
}

impl ValidatorSelector {
    /// Score with `normalize(SHA-256(id ":" seed))`; never rejects.
    pub fn hash_only() -> Self {
        Self {
            mode: ScoringMode::HashOnly,
        }
    }

    /// Score with checked VRF claims.
    pub fn verified(scores: VerifiedScores) -> Self {
        Self {
            mode: ScoringMode::Verified(scores),
        }
    }

    /// Score of a single id, or why it cannot be scored.
    pub fn score(&self, candidate_id: &str, seed: &str) -> Result<f64, RejectReason> {
        match &self.mode {
            ScoringMode::HashOnly => Ok(hash_score(candidate_id, seed)),
            ScoringMode::Verified(scores) => scores.score(candidate_id, seed),
        }
    }

    /// Rank `candidates` for `seed` and keep the best `n`.
    ///
    /// Highest score first; equal scores are ordered by candidate id so the
    /// result is fully determined by the inputs. Returns fewer than `n`
    /// validators when fewer candidates qualify.
    pub fn select<C, I>(&self, candidates: I, seed: &str, n: usize) -> Selection<C>
    where
        C: Candidate,
        I: IntoIterator<Item = C>,
    {
        let mut validators = Vec::new();
        let mut rejected = Vec::new();

        for candidate in candidates {
            match self.score(candidate.candidate_id(), seed) {
                Ok(score) => validators.push(Scored { candidate, score }),
                Err(reason) => {
                    warn!(
                        candidate_id = candidate.candidate_id(),
                        seed,
                        %reason,
                        "candidate excluded from selection"
                    );
                    rejected.push(Rejection {
                        candidate_id: candidate.candidate_id().to_string(),
                        reason,
                    });
                }
            }
        }

        let eligible = validators.len();
        validators.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.candidate.candidate_id().cmp(b.candidate.candidate_id()))
        });
        validators.truncate(n);

        debug!(
            seed,
            requested = n,
            eligible,
            selected = validators.len(),
            rejected = rejected.len(),
            "validators selected"
        );

        Selection {
            validators,
            rejected,
        }
    }
}

impl Default for ValidatorSelector {
    fn default() -> Self {
        Self::hash_only()
    }
}

/// Top `n` of `candidates` by hash-only score for `seed`.
pub fn select_validators<C, I>(candidates: I, seed: &str, n: usize) -> Vec<C>
where
    C: Candidate,
    I: IntoIterator<Item = C>,
{
    ValidatorSelector::hash_only()
        .select(candidates, seed, n)
        .into_candidates()
}
