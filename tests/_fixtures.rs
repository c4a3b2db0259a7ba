#![allow(dead_code)]

use merkle_drop::hash::{keccak256, Keccak256Hasher};
use merkle_drop::leaf::CLAIMANT_SIZE;
use merkle_drop::{Claim, Digest, Distribution};
use once_cell::sync::Lazy;

/// `H("a")`, `H("b")`, `H("c")`.
pub static ABC_LEAVES: Lazy<Vec<Digest>> =
    Lazy::new(|| vec![keccak256(b"a"), keccak256(b"b"), keccak256(b"c")]);

/// Five claims: claimant `[i; 32]` owed `100 * (i + 1)`.
pub static SAMPLE_DISTRIBUTION: Lazy<Distribution<Keccak256Hasher>> =
    Lazy::new(|| Distribution::new(sample_claims(5)).expect("sample distribution"));

pub fn sample_claims(count: u8) -> Vec<Claim> {
    (0..count)
        .map(|i| Claim::new([i; CLAIMANT_SIZE], 100 * (u64::from(i) + 1)))
        .collect()
}

/// Leaves `keccak256(i as u64 little-endian)` for `i` in `0..count`.
pub fn counter_leaves(count: usize) -> Vec<Digest> {
    (0..count as u64)
        .map(|i| keccak256(&i.to_le_bytes()))
        .collect()
}

pub fn digest_from_hex(value: &str) -> Digest {
    let bytes = hex::decode(value).expect("hex digest");
    Digest::try_from(bytes.as_slice()).expect("32-byte digest")
}
