use super::validate::{validate, ParamsError};
use super::CommitmentParams;

/// Serialises the parameter set as pretty-printed JSON.
pub fn serialize_params(params: &CommitmentParams) -> Result<String, ParamsError> {
    serde_json::to_string_pretty(params).map_err(|err| ParamsError::SerializationError {
        reason: err.to_string(),
    })
}

/// Parses a parameter set from JSON and re-runs validation on it.
pub fn deserialize_params(json: &str) -> Result<CommitmentParams, ParamsError> {
    let params: CommitmentParams =
        serde_json::from_str(json).map_err(|err| ParamsError::SerializationError {
            reason: err.to_string(),
        })?;
    validate(&params)?;
    Ok(params)
}
