//! Claim leaf framing.
//!
//! A claim leaf commits to one recipient entry through a fixed 48-byte
//! pre-image:
//!
//! | Offset | Field | Encoding |
//! |--------|-------|----------|
//! | 0..8 | index | `u64` little-endian |
//! | 8..40 | claimant | 32-byte unique address |
//! | 40..48 | amount | `u64` little-endian |
//!
//! The claimant address is derived outside this crate from the mint, the
//! recipient handle and a per-recipient pin. Roots built with a different
//! framing are not interchangeable with these.

use serde::{Deserialize, Serialize};

use crate::hash::DefaultHasher;
use crate::merkle::{Digest, MerkleHasher};

/// Width of the claimant address.
pub const CLAIMANT_SIZE: usize = 32;

/// Length of the leaf pre-image in bytes.
pub const LEAF_PREIMAGE_LEN: usize = 8 + CLAIMANT_SIZE + 8;

/// One entry of a distribution, bound to its position in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimLeaf {
    pub index: u64,
    pub claimant: [u8; CLAIMANT_SIZE],
    pub amount: u64,
}

impl ClaimLeaf {
    pub fn new(index: u64, claimant: [u8; CLAIMANT_SIZE], amount: u64) -> Self {
        Self {
            index,
            claimant,
            amount,
        }
    }

    /// Bytes fed to the hasher.
    pub fn preimage(&self) -> [u8; LEAF_PREIMAGE_LEN] {
        let mut out = [0u8; LEAF_PREIMAGE_LEN];
        out[..8].copy_from_slice(&self.index.to_le_bytes());
        out[8..8 + CLAIMANT_SIZE].copy_from_slice(&self.claimant);
        out[8 + CLAIMANT_SIZE..].copy_from_slice(&self.amount.to_le_bytes());
        out
    }

    /// Leaf digest under hasher `H`.
    pub fn hash<H: MerkleHasher>(&self) -> Digest {
        let index = self.index.to_le_bytes();
        let amount = self.amount.to_le_bytes();
        H::hash_parts(&[&index[..], &self.claimant[..], &amount[..]])
    }

    /// Leaf digest under the default (Keccak-256) hasher.
    pub fn leaf(&self) -> Digest {
        self.hash::<DefaultHasher>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{keccak256, Blake2sHasher, Keccak256Hasher};

    fn sample() -> ClaimLeaf {
        ClaimLeaf::new(3, [0x11; CLAIMANT_SIZE], 1_000_000)
    }

    #[test]
    fn preimage_layout_is_little_endian() {
        let bytes = sample().preimage();
        assert_eq!(LEAF_PREIMAGE_LEN, 48);
        assert_eq!(bytes.len(), LEAF_PREIMAGE_LEN);
        assert_eq!(&bytes[..8], &[3, 0, 0, 0, 0, 0, 0, 0]);
        assert!(bytes[8..40].iter().all(|b| *b == 0x11));
        assert_eq!(&bytes[40..], &1_000_000u64.to_le_bytes());
    }

    #[test]
    fn hash_matches_hash_of_preimage() {
        let leaf = sample();
        assert_eq!(leaf.hash::<Keccak256Hasher>(), keccak256(&leaf.preimage()));
        assert_eq!(leaf.leaf(), leaf.hash::<Keccak256Hasher>());
    }

    #[test]
    fn every_field_is_bound() {
        let base = sample();
        let mut other_index = base;
        other_index.index += 1;
        let mut other_claimant = base;
        other_claimant.claimant[31] ^= 1;
        let mut other_amount = base;
        other_amount.amount += 1;

        for variant in [other_index, other_claimant, other_amount] {
            assert_ne!(variant.leaf(), base.leaf());
        }
    }

    #[test]
    fn backends_disagree() {
        let leaf = sample();
        assert_ne!(leaf.hash::<Keccak256Hasher>(), leaf.hash::<Blake2sHasher>());
    }
}
