//! Core library entry point for the `merkle-drop` commitment scheme.
//!
//! A token distributor publishes one 32-byte root for a list of
//! `(claimant, amount)` entries and later accepts a claim when the recipient
//! presents an inclusion proof for their entry. This crate builds that root,
//! extracts per-entry proofs and verifies them.
//!
//! * [`merkle`] – sorted-pair binary tree, proofs and the proof byte layout.
//! * [`leaf`] – claim leaf pre-image framing.
//! * [`distribution`] – claim list to root, totals and per-claim proofs.
//! * [`hash`] – Keccak-256 (pinned) and Blake2s backends.
//! * [`params`] – validated commitment parameters.

pub mod distribution;
pub mod hash;
pub mod leaf;
pub mod merkle;
pub mod params;
pub mod utils;

pub use distribution::{
    verify_claim, Claim, Distribution, DistributionError, DistributionSummary,
};
pub use hash::DefaultHasher;
pub use leaf::{ClaimLeaf, LEAF_PREIMAGE_LEN};
pub use merkle::{Digest, MerkleError, MerkleProof, MerkleTree, DIGEST_SIZE};

/// Verifies `proof` for `leaf` against `root` with the pinned Keccak-256 hasher.
///
/// Returns `false` for a forged or stale proof; that outcome is not an error.
pub fn verify(leaf: &Digest, proof: &[Digest], root: &Digest) -> bool {
    merkle::verify_proof::<DefaultHasher>(leaf, proof, root)
}
