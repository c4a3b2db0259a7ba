//! Airdrop distributions built on top of the commitment tree.
//!
//! A [`Distribution`] owns the claim list, the per-claim leaves and the tree.
//! Claim `i` is committed as [`ClaimLeaf`] `{ index: i, .. }`, so the list
//! order is part of the commitment and must not change after publishing.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::hash::DefaultHasher;
use crate::leaf::{ClaimLeaf, CLAIMANT_SIZE};
use crate::merkle::{verify_proof, Digest, MerkleError, MerkleHasher, MerkleProof, MerkleTree};
use crate::params::CommitmentParams;

/// A recipient entry before it is bound to an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    pub claimant: [u8; CLAIMANT_SIZE],
    pub amount: u64,
}

impl Claim {
    pub fn new(claimant: [u8; CLAIMANT_SIZE], amount: u64) -> Self {
        Self { claimant, amount }
    }
}

/// Values written to the distributor account when it is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub root: Digest,
    pub max_total_claim: u64,
    pub max_num_nodes: u64,
}

/// Error enumeration for distribution assembly and checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionError {
    Merkle(MerkleError),
    /// The claim amounts do not fit in a `u64` total.
    AmountOverflow,
    /// The proof opened for `index` did not recompute the root.
    ProofMismatch { index: u64 },
    /// The funding account holds less than the distribution pays out.
    InsufficientFunds { available: u64, required: u64 },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::Merkle(err) => write!(f, "merkle error: {}", err),
            DistributionError::AmountOverflow => write!(f, "total claim amount overflows u64"),
            DistributionError::ProofMismatch { index } => {
                write!(f, "proof for claim {} does not match the root", index)
            }
            DistributionError::InsufficientFunds {
                available,
                required,
            } => write!(
                f,
                "funding balance {} is below the total claim {}",
                available, required
            ),
        }
    }
}

impl std::error::Error for DistributionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DistributionError::Merkle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MerkleError> for DistributionError {
    fn from(err: MerkleError) -> Self {
        DistributionError::Merkle(err)
    }
}

/// Claim list committed under hasher `H`.
#[derive(Clone, Debug)]
pub struct Distribution<H: MerkleHasher = DefaultHasher> {
    claims: Vec<Claim>,
    tree: MerkleTree<H>,
    max_total_claim: u64,
}

impl<H: MerkleHasher> Distribution<H> {
    /// Binds every claim to its position, hashes the leaves and builds the tree.
    pub fn new(claims: Vec<Claim>) -> Result<Self, DistributionError> {
        let max_total_claim = total_claim(&claims)?;
        let tree = MerkleTree::new(leaves_for::<H>(&claims))?;
        Ok(Self::assemble(claims, tree, max_total_claim))
    }

    /// As [`Distribution::new`], with the tree checked against `params`.
    ///
    /// The hash family and leaf cap are enforced before any leaf is hashed.
    pub fn with_params(
        params: &CommitmentParams,
        claims: Vec<Claim>,
    ) -> Result<Self, DistributionError> {
        if H::hash_family() != params.hash() {
            return Err(MerkleError::IncompatibleParams {
                reason: "hash family mismatch",
            }
            .into());
        }
        if claims.len() as u64 > params.max_leaves() {
            return Err(MerkleError::TooManyLeaves {
                max: params.max_leaves(),
                got: claims.len(),
            }
            .into());
        }
        let max_total_claim = total_claim(&claims)?;
        let tree = MerkleTree::with_params(params, leaves_for::<H>(&claims))?;
        Ok(Self::assemble(claims, tree, max_total_claim))
    }

    fn assemble(claims: Vec<Claim>, tree: MerkleTree<H>, max_total_claim: u64) -> Self {
        debug!(
            claims = claims.len(),
            max_total_claim,
            depth = tree.depth(),
            "assembled distribution"
        );
        Self {
            claims,
            tree,
            max_total_claim,
        }
    }

    pub fn root(&self) -> Digest {
        self.tree.root()
    }

    /// Sum of every claim amount.
    pub fn max_total_claim(&self) -> u64 {
        self.max_total_claim
    }

    /// Number of claims, which is also the number of leaves.
    pub fn max_num_nodes(&self) -> u64 {
        self.claims.len() as u64
    }

    pub fn summary(&self) -> DistributionSummary {
        DistributionSummary {
            root: self.root(),
            max_total_claim: self.max_total_claim,
            max_num_nodes: self.max_num_nodes(),
        }
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn tree(&self) -> &MerkleTree<H> {
        &self.tree
    }

    /// The claim at `index` together with its index binding.
    pub fn claim(&self, index: u64) -> Option<ClaimLeaf> {
        let position = usize::try_from(index).ok()?;
        self.claims
            .get(position)
            .map(|claim| ClaimLeaf::new(index, claim.claimant, claim.amount))
    }

    /// First index committed to `claimant`.
    pub fn find_claimant(&self, claimant: &[u8; CLAIMANT_SIZE]) -> Option<u64> {
        self.claims
            .iter()
            .position(|claim| claim.claimant == *claimant)
            .map(|position| position as u64)
    }

    /// Inclusion proof for the claim at `index`.
    pub fn claim_proof(&self, index: u64) -> Result<MerkleProof, DistributionError> {
        let position = usize::try_from(index).map_err(|_| MerkleError::IndexOutOfRange {
            index,
            leaf_count: self.tree.leaf_count(),
        })?;
        Ok(self.tree.proof(position)?)
    }

    /// Re-verifies every claim's proof against the root.
    ///
    /// Meant to run once before the summary is published.
    pub fn verify_all(&self) -> Result<(), DistributionError> {
        let root = self.root();
        for (position, proof) in self.tree.proofs().iter().enumerate() {
            let index = position as u64;
            let leaf = self.tree.leaves()[position];
            if !proof.verify::<H>(&leaf, &root) {
                warn!(index, "claim proof does not recompute the root");
                return Err(DistributionError::ProofMismatch { index });
            }
        }
        Ok(())
    }

    /// Fails when `balance` cannot cover [`Distribution::max_total_claim`].
    pub fn check_funding(&self, balance: u64) -> Result<(), DistributionError> {
        if balance < self.max_total_claim {
            return Err(DistributionError::InsufficientFunds {
                available: balance,
                required: self.max_total_claim,
            });
        }
        Ok(())
    }
}

/// Claim-side check: recomputes the leaf for `(index, claimant, amount)` and
/// verifies `proof` against the published `root`.
pub fn verify_claim<H: MerkleHasher>(
    index: u64,
    claimant: &[u8; CLAIMANT_SIZE],
    amount: u64,
    proof: &[Digest],
    root: &Digest,
) -> bool {
    let leaf = ClaimLeaf::new(index, *claimant, amount).hash::<H>();
    verify_proof::<H>(&leaf, proof, root)
}

fn total_claim(claims: &[Claim]) -> Result<u64, DistributionError> {
    claims.iter().try_fold(0u64, |total, claim| {
        total
            .checked_add(claim.amount)
            .ok_or(DistributionError::AmountOverflow)
    })
}

fn leaves_for<H: MerkleHasher>(claims: &[Claim]) -> Vec<Digest> {
    claims
        .iter()
        .enumerate()
        .map(|(position, claim)| {
            ClaimLeaf::new(position as u64, claim.claimant, claim.amount).hash::<H>()
        })
        .collect()
}
