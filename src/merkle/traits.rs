use crate::params::HashFamily;

use super::types::Digest;

/// Hash abstraction used by the commitment layer.
///
/// Implementations only provide the raw compression over a list of byte
/// slices; pair ordering is fixed here so every backend shares the same
/// sorted-pair rule.
pub trait MerkleHasher: Send + Sync {
    /// Hashes the concatenation of `parts`.
    fn hash_parts(parts: &[&[u8]]) -> Digest;

    fn hash_family() -> HashFamily;

    /// Parent of two children: `H(min(a, b) || max(a, b))`.
    fn hash_sorted_pair(a: &Digest, b: &Digest) -> Digest {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self::hash_parts(&[low.as_bytes(), high.as_bytes()])
    }
}
