//! Peer sorting and selection.

use super::distance::xor_distance;
use crate::domain::{NodeId, PeerRecord};

/// Sort peers by XOR distance from a target node (closest first).
///
/// The sort is stable, so equal distances keep their input order.
pub fn sort_peers_by_distance<'a, I>(peers: I, target: &NodeId) -> Vec<&'a PeerRecord>
where
    I: IntoIterator<Item = &'a PeerRecord>,
{
    let mut sorted: Vec<&PeerRecord> = peers.into_iter().collect();
    sorted.sort_by_cached_key(|p| xor_distance(&p.node_id, target));
    sorted
}

/// Find the k closest peers to a target from a list
///
/// # Returns
/// Up to k peers sorted by distance (closest first)
pub fn find_k_closest<'a, I>(peers: I, target: &NodeId, k: usize) -> Vec<&'a PeerRecord>
where
    I: IntoIterator<Item = &'a PeerRecord>,
{
    let mut sorted = sort_peers_by_distance(peers, target);
    sorted.truncate(k);
    sorted
}
