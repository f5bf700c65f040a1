use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while moving data between files and memory.
#[derive(Error, Debug)]
pub enum VmError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image length is not a whole number of words.
    #[error("invalid image: length {len} is not a multiple of 4")]
    InvalidImage { len: usize },

    /// Output size word does not describe whole words.
    #[error("misaligned output size: {size} bytes is not a multiple of 4")]
    MisalignedSize { size: u32 },

    /// Register bank would cover more than the whole address space.
    #[error("register bank of {words} words does not fit in a 32-bit address space")]
    RegisterBankTooLarge { words: u32 },

    #[error("invalid memory layout: {0}")]
    Config(#[from] serde_json::Error),
}

impl VmError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VmError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VmError>;
