pub mod config;
pub mod error;
pub mod loader;
pub mod memory;
pub mod output;

pub use config::{load_layout, parse_layout};
pub use error::{Result, VmError};
pub use loader::{load_image, load_image_from_file};
pub use memory::{zero_register_bank, zero_register_bank_with, Ram, SparseMemory};
pub use output::{extract_output, extract_output_with, save_output, save_output_with};
pub use types::MemoryLayout;
