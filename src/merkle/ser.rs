use super::proof::MerkleProof;
use super::types::{Digest, MerkleError, SerKind, DIGEST_SIZE};

/// Size of the little-endian sibling count that prefixes an encoded proof.
pub const PROOF_LEN_PREFIX: usize = 4;

/// Serialises proof siblings into the claim-instruction layout.
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..4 | sibling count | `u32` little-endian |
/// | 4.. | siblings | `count * 32` raw bytes, leaf level first |
pub fn encode_proof(siblings: &[Digest]) -> Result<Vec<u8>, MerkleError> {
    let count =
        u32::try_from(siblings.len()).map_err(|_| MerkleError::Serialization(SerKind::Proof))?;
    let mut out = Vec::with_capacity(PROOF_LEN_PREFIX + siblings.len() * DIGEST_SIZE);
    out.extend_from_slice(&count.to_le_bytes());
    for sibling in siblings {
        out.extend_from_slice(sibling.as_bytes());
    }
    Ok(out)
}

/// Parses the layout written by [`encode_proof`].
///
/// The declared count must account for every remaining byte; truncated input
/// and trailing bytes are both rejected before anything is allocated.
pub fn decode_proof(bytes: &[u8]) -> Result<MerkleProof, MerkleError> {
    if bytes.len() < PROOF_LEN_PREFIX {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }
    let (prefix, body) = bytes.split_at(PROOF_LEN_PREFIX);
    let mut count_bytes = [0u8; PROOF_LEN_PREFIX];
    count_bytes.copy_from_slice(prefix);
    let count = u32::from_le_bytes(count_bytes) as usize;

    let expected = count
        .checked_mul(DIGEST_SIZE)
        .ok_or(MerkleError::Serialization(SerKind::Proof))?;
    if body.len() != expected {
        return Err(MerkleError::Serialization(SerKind::Proof));
    }

    let mut siblings = Vec::with_capacity(count);
    for chunk in body.chunks_exact(DIGEST_SIZE) {
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(chunk);
        siblings.push(Digest::new(digest));
    }
    Ok(MerkleProof::new(siblings))
}
