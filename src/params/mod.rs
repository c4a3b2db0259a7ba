#![forbid(unsafe_code)]

//! Commitment parameters.
//!
//! [`CommitmentParams`] fixes the knobs a published root depends on: the hash
//! family and the maximum number of leaves a distribution may commit to.
//! Consumers go through [`CommitmentParamsBuilder`], which applies the
//! distributor defaults and validates before handing out a parameter set.
//!
//! | Knob | Default | Notes |
//! |------|---------|-------|
//! | `hash` | Keccak-256 | Must match the hasher type the tree is built with. |
//! | `max_leaves` | `2^32 - 1` | Bounds proof length to 32 siblings. |
//!
//! JSON (de)serialisation lives in the `ser` module and re-validates on load.

mod builder;
mod ser;
mod types;
mod validate;

use serde::{Deserialize, Serialize};

pub use builder::CommitmentParamsBuilder;
pub use ser::{deserialize_params, serialize_params};
pub use types::HashFamily;
pub use validate::{ParamsError, MAX_LEAF_CAP};

/// Validated commitment configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentParams {
    hash: HashFamily,
    max_leaves: u64,
}

impl CommitmentParams {
    /// Hash family every node of the tree is computed with.
    pub const fn hash(&self) -> HashFamily {
        self.hash
    }

    /// Maximum number of leaves accepted.
    pub const fn max_leaves(&self) -> u64 {
        self.max_leaves
    }
}

impl Default for CommitmentParams {
    fn default() -> Self {
        Self {
            hash: HashFamily::Keccak256,
            max_leaves: MAX_LEAF_CAP,
        }
    }
}
