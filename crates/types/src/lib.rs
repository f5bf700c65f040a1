#![no_std]

pub mod word;
pub use word::{Endian, WORD_SIZE, encode_word};

pub mod layout;
pub use layout::*;
