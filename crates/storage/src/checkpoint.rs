use tracing::warn;

use crate::error::{Result, StorageError};

/// What `encode_checkpoints` does when JSON encoding fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodeFallback {
    /// Return the encoder error to the caller.
    #[default]
    Propagate,
    /// Substitute the empty list `"[]"`. Lossy: a saved history written this
    /// way resumes as if no phase had completed.
    EmptyList,
}

/// Checks that a checkpoint history can resume at `cur_phase`.
///
/// The history must hold one entry per phase up to and including
/// `cur_phase`, and `cur_phase` must be a phase that exists.
pub fn validate_checkpoints(checkpoints: &[i64], total_phase: i64, cur_phase: i64) -> Result<()> {
    let expected_len = cur_phase.checked_add(1);
    let good = cur_phase < total_phase
        && expected_len.is_some_and(|len| i64::try_from(checkpoints.len()) == Ok(len));
    if !good {
        warn!(total_phase, cur_phase, len = checkpoints.len(), "checkpoint history rejected");
        return Err(StorageError::ChecklistMismatch {
            checkpoints: checkpoints.to_vec(),
            total_phase,
            cur_phase,
        });
    }
    Ok(())
}

/// Encodes the history as a JSON array, e.g. `[0,120,388]`.
pub fn encode_checkpoints(list: &[i64], fallback: EncodeFallback) -> Result<String> {
    match serde_json::to_string(list) {
        Ok(text) => Ok(text),
        Err(err) => match fallback {
            EncodeFallback::Propagate => Err(StorageError::Encode(err)),
            EncodeFallback::EmptyList => {
                warn!(error = %err, "checkpoint encoding failed, writing empty list");
                Ok(String::from("[]"))
            }
        },
    }
}

/// `encode_checkpoints` with the `"[]"` fallback. Never fails.
pub fn encode_checkpoints_lossy(list: &[i64]) -> String {
    encode_checkpoints(list, EncodeFallback::EmptyList).unwrap_or_else(|_| String::from("[]"))
}

pub fn decode_checkpoints(text: &str) -> Result<Vec<i64>> {
    serde_json::from_str(text).map_err(StorageError::Parse)
}
