//! Text splicing: insert a fragment into a text file at a byte offset.
//!
//! The whole file is loaded, the offset is validated against its length, and the
//! spliced content is written back through `replace_contents` (temp file + rename).
//! Any failure before the rename leaves the original file as it was.

use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{FileOpError, OpResult};

use super::atomic::replace_contents;
use super::helpers::{io_failure, open_failure};
use super::text::ensure_text_file;

/// Insert `text` into `path` so that it starts at byte `offset`.
/// `offset == 0` prepends; `offset == len` appends (no newline is added).
pub fn insert_text(config: &Config, path: &Path, text: &str, offset: i64) -> OpResult<()> {
    ensure_text_file(config, path)?;
    if offset < 0 {
        return Err(FileOpError::NegativeOffset(offset));
    }
    let offset = offset as u64;

    // Read+write open: fails for missing or read-only files before anything is read.
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(open_failure(path))?;
    let len = file.metadata().map_err(io_failure("stat", path))?.len();

    let content = read_all(&mut file, path, len, config.max_buffer_bytes)?;
    drop(file);
    let len = content.len() as u64;

    if offset > len {
        return Err(FileOpError::OffsetBeyondEnd { offset, len });
    }

    let spliced = splice(&content, text.as_bytes(), offset as usize, path)?;
    drop(content);
    debug!(path = %path.display(), offset, old_len = len, new_len = spliced.len(), "Spliced content");

    replace_contents(path, &spliced)?;
    info!(path = %path.display(), offset, inserted = text.len(), "Inserted text");
    Ok(())
}

/// Reserve exactly `len` bytes (bounded by `limit`) and read the file into it.
fn read_all(file: &mut File, path: &Path, len: u64, limit: u64) -> OpResult<Vec<u8>> {
    let mut buf = allocate(path, len, limit)?;
    file.read_to_end(&mut buf).map_err(io_failure("read", path))?;
    Ok(buf)
}

/// Fallible allocation; refusals and allocator failures both surface as `AllocationFailed`.
fn allocate(path: &Path, requested: u64, limit: u64) -> OpResult<Vec<u8>> {
    let failed = || FileOpError::AllocationFailed {
        path: path.to_path_buf(),
        requested,
    };
    if requested > limit {
        return Err(failed());
    }
    let size = usize::try_from(requested).map_err(|_| failed())?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|_| failed())?;
    Ok(buf)
}

fn splice(content: &[u8], fragment: &[u8], at: usize, path: &Path) -> OpResult<Vec<u8>> {
    let total = content.len() as u64 + fragment.len() as u64;
    let mut out = allocate(path, total, u64::MAX)?;
    out.extend_from_slice(&content[..at]);
    out.extend_from_slice(fragment);
    out.extend_from_slice(&content[at..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_positions() {
        let p = Path::new("x.txt");
        assert_eq!(splice(b"abcdef", b"XYZ", 3, p).unwrap(), b"abcXYZdef");
        assert_eq!(splice(b"abcdef", b"XYZ", 0, p).unwrap(), b"XYZabcdef");
        assert_eq!(splice(b"abcdef", b"XYZ", 6, p).unwrap(), b"abcdefXYZ");
        assert_eq!(splice(b"", b"", 0, p).unwrap(), b"");
    }

    #[test]
    fn allocation_over_limit_fails() {
        let err = allocate(Path::new("big.txt"), 10, 9).unwrap_err();
        assert!(matches!(
            err,
            FileOpError::AllocationFailed { requested: 10, .. }
        ));
        assert!(allocate(Path::new("ok.txt"), 9, 9).is_ok());
    }
}
