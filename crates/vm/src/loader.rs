use std::fs;
use std::path::Path;

use tracing::debug;
use types::WORD_SIZE;

use crate::error::{Result, VmError};
use crate::memory::Ram;

/// Writes a big-endian image into memory starting at `base`.
///
/// Zero words are skipped since unwritten memory already reads as zero.
/// This means a zero in the image does not clear a nonzero word left at the
/// same address by an earlier load.
///
/// Addresses wrap at 4 GiB. Returns the number of words written.
pub fn load_image<R: Ram + ?Sized>(data: &[u8], mem: &mut R, base: u32) -> Result<usize> {
    if data.len() % WORD_SIZE as usize != 0 {
        return Err(VmError::InvalidImage { len: data.len() });
    }

    let mut written = 0;
    for (i, chunk) in data.chunks_exact(WORD_SIZE as usize).enumerate() {
        let value = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        if value != 0 {
            let offset = (i as u32).wrapping_mul(WORD_SIZE);
            mem.write_word(base.wrapping_add(offset), value);
            written += 1;
        }
    }

    debug!(bytes = data.len(), written, "image loaded at 0x{:08x}", base);
    Ok(written)
}

/// Reads `path` in full and loads it at `base`.
pub fn load_image_from_file<R: Ram + ?Sized>(
    path: impl AsRef<Path>,
    mem: &mut R,
    base: u32,
) -> Result<usize> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| VmError::io(path, e))?;
    load_image(&data, mem, base)
}
