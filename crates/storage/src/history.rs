use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::checkpoint::{
    EncodeFallback, decode_checkpoints, encode_checkpoints, validate_checkpoints,
};
use crate::error::{Result, StorageError};

/// Checkpoint history of a multi-phase run.
///
/// PHASES: entry `i` belongs to phase `i`, so a log holding `n` entries has
/// completed phases `0..n`. `record` appends exactly one entry per phase
/// transition and refuses to go past `total_phase`.
///
/// PERSISTENCE: the history is saved as a JSON list of integers and checked
/// with `validate_checkpoints` when it is loaded to resume a run.
///
/// TIMING: `started_at` is taken when the log is built, either fresh or on
/// resume, and backs `elapsed`.
#[derive(Clone, Debug)]
pub struct CheckpointLog {
    checkpoints: Vec<i64>,
    total_phase: i64,
    started_at: Instant,
}

impl CheckpointLog {
    /// Empty history for a run of `total_phase` phases.
    pub fn new(total_phase: i64) -> Self {
        Self {
            checkpoints: Vec::new(),
            total_phase,
            started_at: Instant::now(),
        }
    }

    /// Wraps an existing history after checking it can resume at `cur_phase`.
    pub fn resume(checkpoints: Vec<i64>, total_phase: i64, cur_phase: i64) -> Result<Self> {
        validate_checkpoints(&checkpoints, total_phase, cur_phase)?;
        info!(total_phase, cur_phase, "resuming from checkpoint history");
        Ok(Self {
            checkpoints,
            total_phase,
            started_at: Instant::now(),
        })
    }

    /// Reads a saved history from `path` and resumes it at `cur_phase`.
    pub fn load(path: impl AsRef<Path>, total_phase: i64, cur_phase: i64) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        Self::resume(decode_checkpoints(&text)?, total_phase, cur_phase)
    }

    /// Appends the checkpoint for the next phase and returns that phase.
    pub fn record(&mut self, value: i64) -> Result<i64> {
        if self.is_complete() {
            return Err(StorageError::PhaseOverflow {
                total_phase: self.total_phase,
            });
        }
        self.checkpoints.push(value);
        let phase = self.checkpoints.len() as i64 - 1;
        debug!(phase, value, "checkpoint recorded");
        Ok(phase)
    }

    /// Latest phase with a checkpoint, `None` before the first one.
    pub fn current_phase(&self) -> Option<i64> {
        (self.checkpoints.len() as i64).checked_sub(1).filter(|p| *p >= 0)
    }

    pub fn is_complete(&self) -> bool {
        self.checkpoints.len() as i64 >= self.total_phase
    }

    pub fn checkpoints(&self) -> &[i64] {
        &self.checkpoints
    }

    pub fn total_phase(&self) -> i64 {
        self.total_phase
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn to_json(&self, fallback: EncodeFallback) -> Result<String> {
        encode_checkpoints(&self.checkpoints, fallback)
    }

    /// Writes the history to `path`, replacing any previous contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json(EncodeFallback::Propagate)?;
        fs::write(path, text).map_err(|e| StorageError::io(path, e))?;
        debug!(
            path = %path.display(),
            phases = self.checkpoints.len(),
            "checkpoint history saved"
        );
        Ok(())
    }
}
