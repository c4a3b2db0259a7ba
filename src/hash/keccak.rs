use sha3::{Digest as _, Keccak256};

use crate::merkle::{Digest, MerkleHasher};
use crate::params::HashFamily;

/// Keccak-256 backend (original Keccak padding, not NIST SHA3-256).
///
/// This is the pinned hash for published distributor roots: leaves, internal
/// nodes and the claim-side recomputation must all use it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash_parts(parts: &[&[u8]]) -> Digest {
        let mut hasher = Keccak256::new();
        for part in parts {
            hasher.update(part);
        }
        Digest::new(hasher.finalize().into())
    }

    fn hash_family() -> HashFamily {
        HashFamily::Keccak256
    }
}

/// Keccak-256 of a single message.
pub fn keccak256(data: &[u8]) -> Digest {
    Keccak256Hasher::hash_parts(&[data])
}
