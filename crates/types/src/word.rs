/// Size of a memory word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Byte order used when a word leaves memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub const fn from_big_endian(big_endian: bool) -> Self {
        if big_endian { Endian::Big } else { Endian::Little }
    }

    pub const fn encode(self, word: u32) -> [u8; 4] {
        match self {
            Endian::Big => word.to_be_bytes(),
            Endian::Little => word.to_le_bytes(),
        }
    }
}

/// Converts a word to its 4-byte representation.
pub const fn encode_word(word: u32, big_endian: bool) -> [u8; 4] {
    Endian::from_big_endian(big_endian).encode(word)
}
