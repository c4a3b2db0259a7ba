use serde::{Deserialize, Serialize};

/// Hash function family backing a commitment.
///
/// | Variant | Output bits | Description |
/// |---------|-------------|-------------|
/// | `Keccak256` | 256 | Original Keccak padding; pinned for distributor roots. |
/// | `Blake2s` | 256 | Byte-oriented Blake2s. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashFamily {
    /// Keccak-256 as used by the on-chain distributor.
    #[default]
    Keccak256,
    /// Blake2s-256.
    Blake2s,
}

impl HashFamily {
    /// Short lowercase label used in logs.
    pub const fn label(self) -> &'static str {
        match self {
            HashFamily::Keccak256 => "keccak256",
            HashFamily::Blake2s => "blake2s",
        }
    }
}
