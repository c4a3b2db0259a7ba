use blake2::{Blake2s256, Digest as _};

use crate::merkle::{Digest, MerkleHasher};
use crate::params::HashFamily;

/// Blake2s-256 backend.
///
/// Not used by the distributor program. Roots produced with it are only
/// comparable with other Blake2s roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2sHasher;

impl MerkleHasher for Blake2sHasher {
    fn hash_parts(parts: &[&[u8]]) -> Digest {
        let mut state = Blake2s256::new();
        for part in parts {
            blake2::Digest::update(&mut state, part);
        }
        Digest::new(state.finalize().into())
    }

    fn hash_family() -> HashFamily {
        HashFamily::Blake2s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abc_matches_rfc7693_vector() {
        let digest = Blake2sHasher::hash_parts(&[b"abc"]);
        assert_eq!(
            digest.to_string(),
            "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982"
        );
    }
}
