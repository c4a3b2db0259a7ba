//! Sorted-pair binary Merkle commitments.
//!
//! The module fixes the following protocol knobs:
//!
//! * **Leaves:** 32-byte digests supplied by the caller, used as-is. The tree
//!   neither re-hashes nor prefixes them; leaf framing belongs to the caller
//!   (see [`crate::leaf`]).
//! * **Parents:** `H(min(a, b) || max(a, b))` under byte-lexicographic order,
//!   so proofs carry no direction bits.
//! * **Odd levels:** the last node is paired with itself, `H(a || a)`, at
//!   every level where the node count is odd.
//! * **Depth:** `ceil(log2(n))` levels above the leaves; a single leaf is its
//!   own root with an empty proof.
//! * **Hash family:** selected through the [`MerkleHasher`] type parameter,
//!   Keccak-256 by default.
//!
//! Trees are immutable after construction. Proofs are standalone values and
//! verification needs only `(leaf, proof, root)`.

mod proof;
mod ser;
pub mod traits;
mod tree;
mod types;

pub use proof::{compute_root_from_path, verify_proof, verify_proof_bytes, MerkleProof};
pub use ser::{decode_proof, encode_proof, PROOF_LEN_PREFIX};
pub use traits::MerkleHasher;
pub use tree::MerkleTree;
pub use types::{Digest, MerkleError, ProofElement, SerKind, DIGEST_SIZE};
