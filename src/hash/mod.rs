//! Hash backends for the commitment layer.
//!
//! * [`keccak`] – Keccak-256, the pinned hash for distributor roots and
//!   claim leaves.
//! * [`blake2s`] – Blake2s-256, kept for callers that commit outside the
//!   distributor program.
//!
//! Roots are not portable across backends. [`DefaultHasher`] names the backend
//! every crate-level convenience function uses.

pub mod blake2s;
pub mod keccak;

pub use blake2s::Blake2sHasher;
pub use keccak::{keccak256, Keccak256Hasher};

/// Backend used wherever a hasher is not named explicitly.
pub type DefaultHasher = Keccak256Hasher;
