use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    /// Checkpoint text is not a JSON list of integers.
    #[error("failed to parse checkpoint list: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode checkpoint list: {0}")]
    Encode(#[source] serde_json::Error),

    /// Checkpoint history does not line up with the phase being resumed.
    #[error(
        "checkpoints list does not match! checkpoints: {checkpoints:?}, \
         totalPhase: {total_phase}, curPhase: {cur_phase}"
    )]
    ChecklistMismatch {
        checkpoints: Vec<i64>,
        total_phase: i64,
        cur_phase: i64,
    },

    #[error("all {total_phase} phases already have a checkpoint")]
    PhaseOverflow { total_phase: i64 },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
