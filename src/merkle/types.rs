use serde::{Deserialize, Serialize};
use std::fmt;

/// Width in bytes of every leaf, node, root and proof sibling.
pub const DIGEST_SIZE: usize = 32;

/// Fixed-width hash value used for leaves, internal nodes and roots.
///
/// Ordering is byte-lexicographic, which is the order used by sorted-pair
/// hashing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns the bytes.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Mutable view into the digest bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; DIGEST_SIZE] {
        &mut self.0
    }

    /// Parses a digest from an untrusted slice, reporting `element` on a width mismatch.
    pub fn from_slice(bytes: &[u8], element: ProofElement) -> Result<Self, MerkleError> {
        let array: [u8; DIGEST_SIZE] = bytes.try_into().map_err(|_| MerkleError::MalformedProof {
            element,
            len: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x{})", self)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = MerkleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes, ProofElement::Leaf)
    }
}

/// Identifies which verification input failed the width check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofElement {
    Leaf,
    /// Sibling at the given position in the proof, counted from the leaf.
    Sibling(usize),
    Root,
}

impl fmt::Display for ProofElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofElement::Leaf => write!(f, "leaf"),
            ProofElement::Sibling(position) => write!(f, "sibling {}", position),
            ProofElement::Root => write!(f, "root"),
        }
    }
}

/// Canonical serialisation error domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerKind {
    Proof,
}

/// Errors emitted by the Merkle layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    EmptyLeaves,
    IndexOutOfRange { index: u64, leaf_count: usize },
    MalformedProof { element: ProofElement, len: usize },
    TooManyLeaves { max: u64, got: usize },
    IncompatibleParams { reason: &'static str },
    Serialization(SerKind),
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::IndexOutOfRange { index, leaf_count } => {
                write!(
                    f,
                    "index {} out of range for tree with {} leaves",
                    index, leaf_count
                )
            }
            MerkleError::MalformedProof { element, len } => write!(
                f,
                "malformed {}: expected {} bytes, got {}",
                element, DIGEST_SIZE, len
            ),
            MerkleError::TooManyLeaves { max, got } => {
                write!(f, "too many leaves: {} exceeds cap {}", got, max)
            }
            MerkleError::IncompatibleParams { reason } => {
                write!(f, "incompatible parameters: {}", reason)
            }
            MerkleError::Serialization(kind) => {
                write!(f, "serialisation error in {:?}", kind)
            }
        }
    }
}

impl std::error::Error for MerkleError {}
