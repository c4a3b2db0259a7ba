use super::types::HashFamily;
use super::validate::{validate, ParamsError, MAX_LEAF_CAP};
use super::CommitmentParams;

/// Builder used to assemble [`CommitmentParams`] with validation.
///
/// | Field | Default |
/// |-------|---------|
/// | `hash` | [`HashFamily::Keccak256`] |
/// | `max_leaves` | `2^32 - 1` |
#[derive(Debug, Clone)]
pub struct CommitmentParamsBuilder {
    pub hash: HashFamily,
    pub max_leaves: u64,
}

impl CommitmentParamsBuilder {
    /// Returns a builder initialised with the distributor defaults.
    pub fn new() -> Self {
        Self {
            hash: HashFamily::Keccak256,
            max_leaves: MAX_LEAF_CAP,
        }
    }

    /// Starts from the defaults with a different hash family.
    pub fn for_family(hash: HashFamily) -> Self {
        Self {
            hash,
            ..Self::new()
        }
    }

    /// Validates the configuration and returns the immutable parameter set.
    pub fn build(self) -> Result<CommitmentParams, ParamsError> {
        let params = CommitmentParams {
            hash: self.hash,
            max_leaves: self.max_leaves,
        };
        validate(&params)?;
        Ok(params)
    }
}

impl Default for CommitmentParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
