//! Anything that can stand for election.

use crate::domain::{PeerRecord, PeerSummary};

/// A selectable identity.
///
/// The id is what gets scored, so two candidates with the same id always get
/// the same score for a given seed.
pub trait Candidate {
    /// Opaque agent id
    fn candidate_id(&self) -> &str;
}

impl Candidate for PeerSummary {
    fn candidate_id(&self) -> &str {
        &self.source_id
    }
}

impl Candidate for PeerRecord {
    fn candidate_id(&self) -> &str {
        &self.source_id
    }
}

impl Candidate for String {
    fn candidate_id(&self) -> &str {
        self
    }
}

impl Candidate for &str {
    fn candidate_id(&self) -> &str {
        self
    }
}

impl<C: Candidate + ?Sized> Candidate for Box<C> {
    fn candidate_id(&self) -> &str {
        (**self).candidate_id()
    }
}
