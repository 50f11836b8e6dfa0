//! Chunked byte copier.
//!
//! Streams `source` into `final_path` in fixed-size chunks:
//! - Open failures are reported separately for the source and the destination.
//! - Every chunk must be written in full; otherwise the copy stops with `WriteFailed`
//!   and the destination is left partially written (reported, not cleaned up).
//! - A read error or a pending Ctrl-C request stops the copy with `IncompleteCopy`.
//! - A destination that is the source itself is refused before it is opened for writing.
//! Both handles are dropped on every return path.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{FileOpError, OpResult};
use crate::shutdown;

use super::helpers::{io_failure, write_failure};
use super::resolve::resolve_destination;
use super::util;

/// Chunk size used when the config does not override it.
pub const COPY_CHUNK_SIZE: usize = 1024;

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Path actually written (after directory resolution).
    pub dest: PathBuf,
    /// Total bytes copied.
    pub bytes: u64,
}

/// The destination exists but holds only part of the source.
fn incomplete(final_path: &Path, cause: FileOpError) -> FileOpError {
    FileOpError::IncompleteCopy {
        dest: final_path.to_path_buf(),
        cause: Box::new(cause),
    }
}

/// Copy `source` to `destination`, appending the source path when the destination is a directory.
pub fn copy_file(config: &Config, source: &Path, destination: &Path) -> OpResult<CopyReport> {
    let final_path = resolve_destination(source, destination);
    let report = copy_bytes(source, &final_path, config.copy_chunk_size)?;
    info!(src = %source.display(), dest = %report.dest.display(), bytes = report.bytes, "Copied file");
    Ok(report)
}

/// Stream `source` into `final_path` (created or truncated) in `chunk_size` pieces.
pub fn copy_bytes(source: &Path, final_path: &Path, chunk_size: usize) -> OpResult<CopyReport> {
    let mut src = File::open(source).map_err(|e| FileOpError::OpenSource {
        path: source.to_path_buf(),
        source: e,
    })?;
    let src_meta = src.metadata().map_err(io_failure("stat", source))?;
    if util::is_same_file(&src_meta, source, final_path) {
        return Err(FileOpError::SameFile {
            src: source.to_path_buf(),
            dest: final_path.to_path_buf(),
        });
    }
    let mut dst = File::create(final_path).map_err(|e| FileOpError::OpenDestination {
        path: final_path.to_path_buf(),
        source: e,
    })?;

    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut total: u64 = 0;
    loop {
        if shutdown::is_requested() {
            return Err(incomplete(final_path, FileOpError::Interrupted));
        }
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(incomplete(final_path, io_failure("read", source)(e))),
        };
        // write_all turns a short write into ErrorKind::WriteZero.
        dst.write_all(&buf[..n]).map_err(write_failure(final_path))?;
        total += n as u64;
    }

    dst.sync_all().map_err(write_failure(final_path))?;
    debug!(src = %source.display(), dest = %final_path.display(), bytes = total, chunk_size, "Byte copy finished");

    Ok(CopyReport {
        dest: final_path.to_path_buf(),
        bytes: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copy_small_file_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.txt");
        let dst_path = dir.path().join("dst.txt");
        fs::write(&src_path, b"hello world").unwrap();

        let report = copy_bytes(&src_path, &dst_path, COPY_CHUNK_SIZE).unwrap();
        assert_eq!(report.bytes, 11);
        assert_eq!(report.dest, dst_path);
        assert_eq!(fs::read(&dst_path).unwrap(), b"hello world");
    }

    #[test]
    fn truncates_existing_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::write(&src, b"ab").unwrap();
        fs::write(&dst, b"much longer old content").unwrap();

        copy_bytes(&src, &dst, 4).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"ab");
    }

    #[test]
    fn missing_source_does_not_create_destination() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out");
        let err = copy_bytes(&dir.path().join("nope"), &dst, COPY_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, FileOpError::OpenSource { .. }), "got {err:?}");
        assert!(!dst.exists());
    }

    #[test]
    fn unopenable_destination_is_reported() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::write(&src, b"data").unwrap();
        let dst = dir.path().join("missing-dir").join("out");
        let err = copy_bytes(&src, &dst, COPY_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, FileOpError::OpenDestination { .. }), "got {err:?}");
    }

    #[test]
    fn copy_onto_itself_is_refused_and_keeps_content() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("same.txt");
        fs::write(&src, b"precious").unwrap();
        let err = copy_bytes(&src, &dir.path().join(".").join("same.txt"), COPY_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, FileOpError::SameFile { .. }), "got {err:?}");
        assert_eq!(fs::read(&src).unwrap(), b"precious");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn read_error_mid_copy_is_partial() {
        let dir = tempdir().unwrap();
        // Opening a directory works on Linux; reading it fails with EISDIR.
        let src = dir.path().join("not-a-file");
        fs::create_dir(&src).unwrap();
        let dst = dir.path().join("out");
        let err = copy_bytes(&src, &dst, COPY_CHUNK_SIZE).unwrap_err();
        match &err {
            FileOpError::IncompleteCopy { dest, cause } => {
                assert_eq!(dest, &dst);
                assert!(matches!(**cause, FileOpError::Io { op: "read", .. }), "cause {cause:?}");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(err.is_partial());
        assert!(err.to_string().contains("incomplete"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_reports_write_failed() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::write(&src, vec![7u8; 4096]).unwrap();
        let full = Path::new("/dev/full");
        if !full.exists() {
            eprintln!("skipping: /dev/full not available");
            return;
        }
        let err = copy_bytes(&src, full, COPY_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, FileOpError::WriteFailed { .. }), "got {err:?}");
        assert!(err.is_partial());
    }
}
