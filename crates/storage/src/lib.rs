pub mod checkpoint;
pub mod error;
pub mod fs;
pub mod history;

pub use checkpoint::{
    EncodeFallback, decode_checkpoints, encode_checkpoints, encode_checkpoints_lossy,
    validate_checkpoints,
};
pub use error::{Result, StorageError};
pub use fs::copy_file;
pub use history::CheckpointLog;
