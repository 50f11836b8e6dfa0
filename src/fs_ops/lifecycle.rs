//! Create, delete and rename single files.

use std::fs::{self, File};
use std::path::Path;
use tracing::info;

use crate::errors::OpResult;

use super::helpers::{io_failure, io_failure_or_not_found};

/// Create an empty file, truncating it if it already exists.
pub fn create_file(path: &Path) -> OpResult<()> {
    File::create(path).map_err(io_failure("create file", path))?;
    info!(path = %path.display(), "Created file");
    Ok(())
}

pub fn delete_file(path: &Path) -> OpResult<()> {
    fs::remove_file(path).map_err(io_failure_or_not_found("delete file", path))?;
    info!(path = %path.display(), "Deleted file");
    Ok(())
}

/// Plain rename; no copy fallback (see `move_file` for that).
pub fn rename_file(old: &Path, new: &Path) -> OpResult<()> {
    fs::rename(old, new).map_err(io_failure("rename file", old))?;
    info!(from = %old.display(), to = %new.display(), "Renamed file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FileOpError;
    use tempfile::tempdir;

    #[test]
    fn create_truncates_existing() {
        let td = tempdir().unwrap();
        let p = td.path().join("a.txt");
        fs::write(&p, b"old").unwrap();
        create_file(&p).unwrap();
        assert_eq!(fs::metadata(&p).unwrap().len(), 0);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let td = tempdir().unwrap();
        let err = delete_file(&td.path().join("gone")).unwrap_err();
        assert!(matches!(err, FileOpError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn rename_moves_name() {
        let td = tempdir().unwrap();
        let a = td.path().join("a");
        let b = td.path().join("b");
        fs::write(&a, b"x").unwrap();
        rename_file(&a, &b).unwrap();
        assert!(!a.exists());
        assert_eq!(fs::read(&b).unwrap(), b"x");
    }
}
