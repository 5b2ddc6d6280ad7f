//! K-Bucket implementation for Kademlia routing.

use crate::domain::{PeerDescriptor, PeerRecord, Timestamp};

/// A k-bucket storing up to k peers at a specific distance range
///
/// Peers are kept in recency order: the head is the least recently seen,
/// the tail the most recent. Every refresh moves an entry to the tail, so a
/// head-to-tail scan visits the oldest contacts first.
#[derive(Debug, Clone)]
pub struct KBucket {
    /// Peers in this bucket (max size = K, default 20)
    pub(crate) peers: Vec<PeerRecord>,
    /// Last time this bucket was updated
    pub(crate) last_updated: Timestamp,
}

impl KBucket {
    /// Create a new empty k-bucket
    pub fn new() -> Self {
        Self {
            peers: Vec::new(),
            last_updated: Timestamp::from_millis(0),
        }
    }

    /// Get the number of peers in this bucket
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Check if the bucket is empty
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Check if the bucket is full
    pub fn is_full(&self, k: usize) -> bool {
        self.peers.len() >= k
    }

    /// Get the oldest peer (least recently seen)
    pub fn oldest_peer(&self) -> Option<&PeerRecord> {
        self.peers.first()
    }

    /// Get all peers in this bucket, oldest first
    pub fn peers(&self) -> &[PeerRecord] {
        &self.peers
    }

    /// Last time anything in this bucket changed
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    pub(crate) fn position(&self, source_id: &str) -> Option<usize> {
        self.peers.iter().position(|p| p.source_id == source_id)
    }

    pub(crate) fn get(&self, source_id: &str) -> Option<&PeerRecord> {
        self.peers.iter().find(|p| p.source_id == source_id)
    }

    /// Add a peer to the tail (assumes not full)
    pub(crate) fn push(&mut self, peer: PeerRecord, now: Timestamp) {
        self.peers.push(peer);
        self.last_updated = now;
    }

    /// Overwrite the entry at `pos` from a repeat announce and move it to the tail
    pub(crate) fn refresh_at(&mut self, pos: usize, descriptor: PeerDescriptor, now: Timestamp) {
        let mut peer = self.peers.remove(pos);
        peer.refresh(descriptor, now);
        self.peers.push(peer);
        self.last_updated = now;
    }

    /// Heartbeat: mark as seen and move to the tail, metadata untouched
    pub(crate) fn touch_peer(&mut self, source_id: &str, now: Timestamp) -> bool {
        match self.position(source_id) {
            Some(pos) => {
                let mut peer = self.peers.remove(pos);
                peer.last_seen = now;
                self.peers.push(peer);
                self.last_updated = now;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_peer(&mut self, source_id: &str) -> Option<PeerRecord> {
        self.position(source_id).map(|pos| self.peers.remove(pos))
    }

    /// First stale entry scanning from the head
    pub(crate) fn first_stale_position(&self, now: Timestamp, stale_after_ms: u64) -> Option<usize> {
        self.peers
            .iter()
            .position(|p| p.is_stale(now, stale_after_ms))
    }

    /// Evict the entry at `pos` and append `peer` at the tail
    pub(crate) fn replace_at(&mut self, pos: usize, peer: PeerRecord, now: Timestamp) -> PeerRecord {
        let evicted = self.peers.remove(pos);
        self.push(peer, now);
        evicted
    }

    /// Drop every stale entry, returning how many went
    pub(crate) fn evict_stale(&mut self, now: Timestamp, stale_after_ms: u64) -> usize {
        let before = self.peers.len();
        self.peers.retain(|p| !p.is_stale(now, stale_after_ms));
        before - self.peers.len()
    }
}

impl Default for KBucket {
    fn default() -> Self {
        Self::new()
    }
}
