//! Atomic replace helpers.
//! - `try_atomic_move` renames with overwrite semantics on every platform.
//! - `replace_contents` writes new bytes to a sibling temp file, syncs it, copies the
//!   original's permissions and renames it over the target, so readers see either the
//!   old content or the new content, never a truncated file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::errors::{FileOpError, OpResult};

use super::helpers::io_failure;
use super::util;

pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    // Windows: ensure destination path is free (rename doesn't overwrite there).
    #[cfg(windows)]
    {
        if let Err(e) = fs::remove_file(dst) {
            if e.kind() != io::ErrorKind::NotFound {
                return Err(e);
            }
        }
    }

    fs::rename(src, dst)?;

    // Unix: fsync the directory to persist the rename (best-effort).
    let _ = util::fsync_dir(util::parent_or_cwd(dst));
    Ok(())
}

/// Replace the content of an existing file with `contents`.
/// A symlinked `target` is followed; the link itself stays in place.
/// The target is untouched if any step before the final rename fails.
pub(crate) fn replace_contents(target: &Path, contents: &[u8]) -> OpResult<()> {
    let perms = fs::metadata(target)
        .map_err(io_failure("stat", target))?
        .permissions();
    // Write through symlinks: the temp file goes next to, and replaces, the real file.
    let real = fs::canonicalize(target).map_err(io_failure("resolve", target))?;
    let tmp_path = util::unique_temp_path(&real);
    debug!(target = %target.display(), tmp = %tmp_path.display(), bytes = contents.len(), "Writing replacement content");

    let written = (|| -> io::Result<()> {
        let mut tmp = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)?;
        tmp.write_all(contents)?;
        tmp.sync_all()?;
        fs::set_permissions(&tmp_path, perms)
    })();

    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(FileOpError::Io {
            op: "write a temporary copy of",
            path: target.to_path_buf(),
            source,
        });
    }

    if let Err(source) = try_atomic_move(&tmp_path, &real) {
        let _ = fs::remove_file(&tmp_path);
        return Err(FileOpError::Io {
            op: "replace",
            path: target.to_path_buf(),
            source,
        });
    }

    Ok(())
}
