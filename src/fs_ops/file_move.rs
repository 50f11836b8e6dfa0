//! File move implementation.
//! Attempts a plain rename; when that fails (cross-filesystem, destination is a
//! directory, ...) falls back to a chunked copy followed by deleting the source.
//! A failed delete after a good copy is reported as its own error: both files exist.
//! A destination that resolves to the source itself is refused and the source kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::{FileOpError, OpResult};

use super::copy::copy_bytes;
use super::resolve::resolve_destination;
use super::util::{is_cross_device, is_same_file};

/// How a move was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    /// Single atomic rename.
    Renamed,
    /// Copy to the destination, then delete the source.
    Copied,
}

/// Outcome of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub dest: PathBuf,
    pub method: MoveMethod,
}

/// Move `source` to `destination`.
pub fn move_file(config: &Config, source: &Path, destination: &Path) -> OpResult<MoveReport> {
    let rename_err = match fs::rename(source, destination) {
        Ok(()) => {
            info!(src = %source.display(), dest = %destination.display(), "Renamed file atomically");
            return Ok(MoveReport {
                dest: destination.to_path_buf(),
                method: MoveMethod::Renamed,
            });
        }
        Err(e) => e,
    };

    let hint = rename_hint(&rename_err);
    warn!(error = %rename_err, hint, "Rename failed, using copy+delete");

    let final_path = resolve_destination(source, destination);
    // The source must survive a move onto itself; the copy below would refuse it too,
    // but report it plainly rather than as a failed copy.
    if let Ok(meta) = fs::metadata(source)
        && is_same_file(&meta, source, &final_path)
    {
        return Err(FileOpError::SameFile {
            src: source.to_path_buf(),
            dest: final_path,
        });
    }
    let report = copy_bytes(source, &final_path, config.copy_chunk_size)
        .map_err(|e| FileOpError::CopyFailed(Box::new(e)))?;

    fs::remove_file(source).map_err(|e| FileOpError::SourceDeleteFailed {
        src: source.to_path_buf(),
        dest: report.dest.clone(),
        source: e,
    })?;

    info!(src = %source.display(), dest = %report.dest.display(), bytes = report.bytes, "Moved file by copy+delete");
    Ok(MoveReport {
        dest: report.dest,
        method: MoveMethod::Copied,
    })
}

fn rename_hint(e: &io::Error) -> &'static str {
    if is_cross_device(e) {
        return "cross-filesystem; will copy instead";
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => "permission denied; copy may still succeed",
        io::ErrorKind::NotFound => "source or destination parent missing",
        _ => "falling back to copy",
    }
}
