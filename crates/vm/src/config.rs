use std::fs;
use std::path::Path;

use types::{MemoryLayout, MAX_REGISTER_BANK_WORDS};

use crate::error::{Result, VmError};

/// Parses a JSON layout override. Missing fields keep their defaults.
pub fn parse_layout(text: &str) -> Result<MemoryLayout> {
    let layout: MemoryLayout = serde_json::from_str(text)?;
    if layout.register_bank_words > MAX_REGISTER_BANK_WORDS {
        return Err(VmError::RegisterBankTooLarge {
            words: layout.register_bank_words,
        });
    }
    Ok(layout)
}

pub fn load_layout(path: impl AsRef<Path>) -> Result<MemoryLayout> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| VmError::io(path, e))?;
    parse_layout(&text)
}
