//! Validator Selection
//!
//! Ranks a candidate set by a per-seed pseudorandom score and keeps the top
//! N. Two scoring modes:
//!
//! - **Hash-only**: `normalize(SHA-256(id ":" seed))`. Cheap, reproducible by
//!   anyone, but carries no proof of who computed it.
//! - **Verified**: each candidate's score is its own VRF output, checked
//!   against a public key registered before the seed was known. Candidates
//!   whose proof is missing or fails are rejected and reported.
//!
//! Seed provenance is the caller's responsibility. A seed a candidate can
//! choose (or predict before committing its key) lets that candidate bias
//! its own score; use a value fixed after key registration, such as a future
//! block hash or a multi-party commitment.

mod candidate;
mod selector;
mod types;

pub use candidate::Candidate;
pub use selector::{select_validators, ValidatorSelector, VerifiedScores};
pub use types::{RejectReason, Rejection, Scored, Selection};
