use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::hash::DefaultHasher;
use crate::params::CommitmentParams;

use super::proof::MerkleProof;
use super::traits::MerkleHasher;
use super::types::{Digest, MerkleError};

/// Binary sorted-pair Merkle tree stored as an arena of levels.
///
/// Level 0 holds the caller's leaves unmodified; the last level holds the
/// root alone. The tree is immutable once built: a changed leaf set needs a
/// new tree and a new root.
#[derive(Clone)]
pub struct MerkleTree<H: MerkleHasher = DefaultHasher> {
    levels: Vec<Vec<Digest>>,
    root: Digest,
    marker: PhantomData<H>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Builds the tree over `leaves` in the order given.
    ///
    /// Fails with [`MerkleError::EmptyLeaves`] when no leaf is supplied.
    pub fn new<I>(leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = Digest>,
    {
        let leaves: Vec<Digest> = leaves.into_iter().collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }

        let leaf_count = leaves.len();
        let mut levels = Vec::with_capacity(depth_for(leaf_count) + 1);
        levels.push(leaves);

        loop {
            let current = &levels[levels.len() - 1];
            if current.len() == 1 {
                break;
            }
            let next = hash_level::<H>(current);
            levels.push(next);
        }

        let root = levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .ok_or(MerkleError::EmptyLeaves)?;
        let tree = Self {
            levels,
            root,
            marker: PhantomData,
        };
        debug!(
            leaf_count,
            depth = tree.depth(),
            hash = H::hash_family().label(),
            "built merkle tree"
        );
        Ok(tree)
    }

    /// Builds the tree after checking `leaves` against the parameter set.
    ///
    /// The hasher type must belong to `params.hash()` and the leaf count must
    /// not exceed `params.max_leaves()`.
    pub fn with_params<I>(params: &CommitmentParams, leaves: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = Digest>,
    {
        if H::hash_family() != params.hash() {
            return Err(MerkleError::IncompatibleParams {
                reason: "hash family mismatch",
            });
        }
        let leaves: Vec<Digest> = leaves.into_iter().collect();
        if leaves.len() as u64 > params.max_leaves() {
            return Err(MerkleError::TooManyLeaves {
                max: params.max_leaves(),
                got: leaves.len(),
            });
        }
        Self::new(leaves)
    }

    /// Returns the root digest.
    pub fn root(&self) -> Digest {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of hashing levels above the leaves; also the length of every proof.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0]
    }

    /// Nodes at `depth`, with `0` being the leaves.
    pub fn level(&self, depth: usize) -> Option<&[Digest]> {
        self.levels.get(depth).map(|level| level.as_slice())
    }

    /// Extracts the inclusion proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index: index as u64,
                leaf_count,
            });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.levels[..self.depth()] {
            siblings.push(level[sibling_position(position, level.len())]);
            position /= 2;
        }

        trace!(index, depth = siblings.len(), "opened merkle proof");
        Ok(MerkleProof::new(siblings))
    }

    /// Proofs for every leaf, in index order.
    pub fn proofs(&self) -> Vec<MerkleProof> {
        (0..self.leaf_count())
            .filter_map(|index| self.proof(index).ok())
            .collect()
    }
}

impl<H: MerkleHasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("hash", &H::hash_family())
            .field("leaf_count", &self.leaf_count())
            .field("depth", &self.depth())
            .field("root", &self.root)
            .finish()
    }
}

/// `ceil(log2(leaf_count))`, zero for a single leaf.
pub(crate) fn depth_for(leaf_count: usize) -> usize {
    let mut depth = 0;
    let mut width = leaf_count;
    while width > 1 {
        width = width.div_ceil(2);
        depth += 1;
    }
    depth
}

/// Position of the node paired with `position` in a level of `len` nodes.
///
/// The last node of an odd-length level is paired with itself.
pub(crate) fn sibling_position(position: usize, len: usize) -> usize {
    if position % 2 == 1 {
        position - 1
    } else if position + 1 < len {
        position + 1
    } else {
        position
    }
}

/// Parent of the dangling last node of an odd-length level: `H(a || a)`.
pub(crate) fn duplicated_parent<H: MerkleHasher>(node: &Digest) -> Digest {
    H::hash_sorted_pair(node, node)
}

fn parent_of_chunk<H: MerkleHasher>(chunk: &[Digest]) -> Digest {
    match chunk {
        [left, right] => H::hash_sorted_pair(left, right),
        [last] => duplicated_parent::<H>(last),
        _ => unreachable!("levels are split into chunks of at most two nodes"),
    }
}

fn hash_level<H: MerkleHasher>(level: &[Digest]) -> Vec<Digest> {
    #[cfg(feature = "parallel")]
    {
        let pairs = level.len().div_ceil(2);
        if crate::utils::parallel::should_parallelize(pairs) {
            use rayon::prelude::*;
            let chunk = crate::utils::parallel::preferred_chunk_size(pairs);
            return level
                .par_chunks(2)
                .with_min_len(chunk)
                .map(parent_of_chunk::<H>)
                .collect();
        }
    }
    level.chunks(2).map(parent_of_chunk::<H>).collect()
}
