use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, StorageError};

const COPY_BUF_SIZE: usize = 8 * 1024;

/// Copies `src` to `dst` byte for byte, creating or truncating `dst`.
///
/// `src` must be a regular file. Returns the number of bytes copied.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    let meta = fs::metadata(src).map_err(|e| StorageError::io(src, e))?;
    if !meta.file_type().is_file() {
        return Err(StorageError::NotRegularFile(src.to_path_buf()));
    }

    let mut source = File::open(src).map_err(|e| StorageError::io(src, e))?;
    let mut destination = File::create(dst).map_err(|e| StorageError::io(dst, e))?;
    let copied = copy_stream(&mut source, src, &mut destination, dst)?;

    debug!(src = %src.display(), dst = %dst.display(), bytes = copied, "file copied");
    Ok(copied)
}

/// Like `io::copy`, but a failed read is reported against `src` and a
/// failed write or flush against `dst`.
fn copy_stream<R: Read, W: Write>(
    reader: &mut R,
    src: &Path,
    writer: &mut W,
    dst: &Path,
) -> Result<u64> {
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut copied = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StorageError::io(src, e)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(|e| StorageError::io(dst, e))?;
        copied += n as u64;
    }
    writer.flush().map_err(|e| StorageError::io(dst, e))?;
    Ok(copied)
}
