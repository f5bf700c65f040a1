use serde::{Deserialize, Serialize};

use crate::WORD_SIZE;

/// First word of the register bank cleared by `zero_register_bank`.
pub const REGISTER_BANK_BASE: u32 = 0xC000_0000;
/// Number of words in the register bank.
pub const REGISTER_BANK_WORDS: u32 = 36;

/// Largest register bank that fits in the 32-bit address space.
pub const MAX_REGISTER_BANK_WORDS: u32 = u32::MAX / WORD_SIZE;

/// Holds the output length in bytes.
pub const OUTPUT_SIZE_ADDR: u32 = 0x3200_0000;
/// First payload word of the output region.
pub const OUTPUT_DATA_ADDR: u32 = OUTPUT_SIZE_ADDR + WORD_SIZE;

/// Fixed addresses shared between the execution engine and the host.
///
/// Every field defaults to the constants above, so a partial JSON document
/// only overrides what it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryLayout {
    pub register_bank_base: u32,
    pub register_bank_words: u32,
    pub output_size_addr: u32,
    pub output_data_addr: u32,
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self {
            register_bank_base: REGISTER_BANK_BASE,
            register_bank_words: REGISTER_BANK_WORDS,
            output_size_addr: OUTPUT_SIZE_ADDR,
            output_data_addr: OUTPUT_DATA_ADDR,
        }
    }
}

impl MemoryLayout {
    /// Word addresses of the register bank, in ascending order.
    pub fn register_bank(&self) -> impl Iterator<Item = u32> {
        let base = self.register_bank_base;
        (0..self.register_bank_words).map(move |i| base.wrapping_add(i.wrapping_mul(WORD_SIZE)))
    }

    /// One past the last byte of the register bank, wrapping at 4 GiB.
    pub fn register_bank_end(&self) -> u32 {
        self.register_bank_base
            .wrapping_add(self.register_bank_words.wrapping_mul(WORD_SIZE))
    }
}
