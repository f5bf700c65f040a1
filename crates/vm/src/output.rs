use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{debug, trace};
use types::{Endian, MemoryLayout, WORD_SIZE};

use crate::error::{Result, VmError};
use crate::memory::Ram;

/// Serializes the output region to little-endian bytes.
///
/// The size word at `0x32000000` gives the payload length in bytes, and the
/// payload words start at `0x32000004`.
pub fn extract_output<R: Ram + ?Sized>(mem: &R) -> Result<Vec<u8>> {
    extract_output_with(mem, &MemoryLayout::default())
}

pub fn extract_output_with<R: Ram + ?Sized>(mem: &R, layout: &MemoryLayout) -> Result<Vec<u8>> {
    let size = mem.read_word(layout.output_size_addr);
    if size % WORD_SIZE != 0 {
        return Err(VmError::MisalignedSize { size });
    }

    let mut output = Vec::with_capacity(size as usize);
    for offset in (0..size).step_by(WORD_SIZE as usize) {
        let word = mem.read_word(layout.output_data_addr.wrapping_add(offset));
        output.extend_from_slice(&Endian::Little.encode(word));
    }

    debug!(size, "output extracted");
    trace!(payload = %hex::encode(&output));
    Ok(output)
}

/// Writes the output region to `path`, creating or truncating it.
pub fn save_output<R: Ram + ?Sized>(path: impl AsRef<Path>, mem: &R) -> Result<()> {
    save_output_with(path, mem, &MemoryLayout::default())
}

pub fn save_output_with<R: Ram + ?Sized>(
    path: impl AsRef<Path>,
    mem: &R,
    layout: &MemoryLayout,
) -> Result<()> {
    let path = path.as_ref();
    let output = extract_output_with(mem, layout)?;

    let mut file = File::create(path).map_err(|e| VmError::io(path, e))?;
    file.write_all(&output).map_err(|e| VmError::io(path, e))?;
    file.flush().map_err(|e| VmError::io(path, e))?;

    debug!(path = %path.display(), bytes = output.len(), "output saved");
    Ok(())
}
