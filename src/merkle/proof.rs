use serde::{Deserialize, Serialize};

use super::traits::MerkleHasher;
use super::types::{Digest, MerkleError, ProofElement};

/// Inclusion proof: sibling digests ordered from the leaf level up to the root.
///
/// Sorted-pair hashing makes the parent independent of child order, so no
/// left/right direction bits are carried. The proof owns its siblings and
/// holds no reference into the tree it came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerkleProof {
    siblings: Vec<Digest>,
}

impl MerkleProof {
    pub fn new(siblings: Vec<Digest>) -> Self {
        Self { siblings }
    }

    pub fn siblings(&self) -> &[Digest] {
        &self.siblings
    }

    /// Mutable access to siblings.
    pub fn siblings_mut(&mut self) -> &mut [Digest] {
        &mut self.siblings
    }

    pub fn into_siblings(self) -> Vec<Digest> {
        self.siblings
    }

    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Checks this proof for `leaf` against `root` with hasher `H`.
    pub fn verify<H: MerkleHasher>(&self, leaf: &Digest, root: &Digest) -> bool {
        verify_proof::<H>(leaf, &self.siblings, root)
    }
}

impl From<Vec<Digest>> for MerkleProof {
    fn from(siblings: Vec<Digest>) -> Self {
        Self::new(siblings)
    }
}

impl AsRef<[Digest]> for MerkleProof {
    fn as_ref(&self) -> &[Digest] {
        &self.siblings
    }
}

/// Folds `siblings` over `leaf` and returns the candidate root.
pub fn compute_root_from_path<H: MerkleHasher>(leaf: &Digest, siblings: &[Digest]) -> Digest {
    siblings
        .iter()
        .fold(*leaf, |acc, sibling| H::hash_sorted_pair(&acc, sibling))
}

/// Returns `true` iff `proof` recomputes `root` from `leaf`.
///
/// Pure: the function touches nothing but its arguments and emits no events,
/// so it is safe to run on untrusted claims.
pub fn verify_proof<H: MerkleHasher>(leaf: &Digest, proof: &[Digest], root: &Digest) -> bool {
    compute_root_from_path::<H>(leaf, proof) == *root
}

/// Byte-level variant of [`verify_proof`] for untrusted, unparsed input.
///
/// Every element must be exactly 32 bytes; anything else fails with
/// [`MerkleError::MalformedProof`] instead of being padded or truncated.
/// Siblings are consumed as a stream, so nothing proportional to the proof
/// is allocated.
pub fn verify_proof_bytes<H, I, B>(
    leaf: &[u8],
    proof: I,
    root: &[u8],
) -> Result<bool, MerkleError>
where
    H: MerkleHasher,
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let leaf = Digest::from_slice(leaf, ProofElement::Leaf)?;
    let root = Digest::from_slice(root, ProofElement::Root)?;
    let mut acc = leaf;
    for (position, sibling) in proof.into_iter().enumerate() {
        let sibling = Digest::from_slice(sibling.as_ref(), ProofElement::Sibling(position))?;
        acc = H::hash_sorted_pair(&acc, &sibling);
    }
    Ok(acc == root)
}
