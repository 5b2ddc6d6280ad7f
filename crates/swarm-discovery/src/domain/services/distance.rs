//! Kademlia distance calculations.

use crate::domain::{Distance, NodeId};

/// Address of an agent: `SHA-256(agent_id)`.
pub fn node_id_for(agent_id: &str) -> NodeId {
    NodeId::from_agent_id(agent_id)
}

/// Calculate the XOR distance between two NodeIds
///
/// # Properties
/// - Symmetric: `xor_distance(a, b) == xor_distance(b, a)`
/// - Zero iff `a == b`, strictly positive otherwise
pub fn xor_distance(a: &NodeId, b: &NodeId) -> Distance {
    Distance::between(a, b)
}

/// Bucket a remote node falls into relative to the local node.
///
/// Equals the number of leading zero bits of `local XOR remote`, so bucket 0
/// holds the far half of the address space and bucket 255 the single closest
/// neighbour. `None` for `remote == local`: self is never bucketed.
#[inline]
pub fn bucket_index(local: &NodeId, remote: &NodeId) -> Option<usize> {
    let local_bytes = local.as_bytes();
    let remote_bytes = remote.as_bytes();

    for i in 0..32 {
        let xor = local_bytes[i] ^ remote_bytes[i];
        if xor != 0 {
            return Some(i * 8 + xor.leading_zeros() as usize);
        }
    }

    None
}
