use std::collections::HashMap;

use tracing::debug;
use types::MemoryLayout;

/// Word-level access to machine memory.
///
/// The execution engine owns the concrete memory; everything in this crate
/// reaches it through this trait. Addresses are expected to be word aligned.
pub trait Ram {
    fn read_word(&self, addr: u32) -> u32;
    fn write_word(&mut self, addr: u32, word: u32);
}

/// Sparse 32-bit address space backed by a hash map.
///
/// Only touched words occupy space. An address that was never written
/// reads as zero. Writing zero keeps an explicit entry; nothing is ever
/// removed from the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseMemory {
    words: HashMap<u32, u32>,
}

impl SparseMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    pub fn write(&mut self, addr: u32, word: u32) {
        self.words.insert(addr, word);
    }

    /// True if `addr` has been written, even with zero.
    pub fn contains(&self, addr: u32) -> bool {
        self.words.contains_key(&addr)
    }

    /// Number of stored words.
    pub fn touched(&self) -> usize {
        self.words.len()
    }

    /// Stored words sorted by address.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> {
        let mut entries: Vec<(u32, u32)> = self.words.iter().map(|(a, w)| (*a, *w)).collect();
        entries.sort_unstable_by_key(|(addr, _)| *addr);
        entries.into_iter()
    }
}

impl Ram for SparseMemory {
    fn read_word(&self, addr: u32) -> u32 {
        self.read(addr)
    }

    fn write_word(&mut self, addr: u32, word: u32) {
        self.write(addr, word)
    }
}

impl FromIterator<(u32, u32)> for SparseMemory {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Clears the 36-word register bank at `0xC0000000`.
pub fn zero_register_bank<R: Ram + ?Sized>(mem: &mut R) {
    zero_register_bank_with(mem, &MemoryLayout::default())
}

pub fn zero_register_bank_with<R: Ram + ?Sized>(mem: &mut R, layout: &MemoryLayout) {
    for addr in layout.register_bank() {
        mem.write_word(addr, 0);
    }
    debug!(
        words = layout.register_bank_words,
        "register bank [0x{:08x}, 0x{:08x}) zeroed",
        layout.register_bank_base,
        layout.register_bank_end()
    );
}
