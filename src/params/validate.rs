use std::fmt;

use super::CommitmentParams;

/// Largest accepted leaf cap. Keeps proofs at or below 32 siblings.
pub const MAX_LEAF_CAP: u64 = u32::MAX as u64;

/// Error enumeration for parameter validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The leaf cap must admit at least one leaf.
    LeafCapZero,
    /// The leaf cap exceeded [`MAX_LEAF_CAP`].
    LeafCapTooLarge { max: u64, got: u64 },
    /// The JSON form could not be produced or parsed.
    SerializationError { reason: String },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::LeafCapZero => write!(f, "leaf cap must be non-zero"),
            ParamsError::LeafCapTooLarge { max, got } => {
                write!(f, "leaf cap {} exceeds maximum {}", got, max)
            }
            ParamsError::SerializationError { reason } => {
                write!(f, "parameter serialisation failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for ParamsError {}

/// Validates all parameter invariants.
pub fn validate(params: &CommitmentParams) -> Result<(), ParamsError> {
    if params.max_leaves == 0 {
        return Err(ParamsError::LeafCapZero);
    }
    if params.max_leaves > MAX_LEAF_CAP {
        return Err(ParamsError::LeafCapTooLarge {
            max: MAX_LEAF_CAP,
            got: params.max_leaves,
        });
    }
    Ok(())
}
