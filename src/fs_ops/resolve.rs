//! Destination resolution for copy and move.
//!
//! When the destination names an existing directory the source path is appended to it
//! exactly as given (`dir/sub/a.txt` for source `sub/a.txt`), not just its file name.
//! Otherwise the destination is used verbatim.

use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use tracing::debug;

/// Compute the final file path a copy or move writes to.
/// One stat of `destination`; the answer can go stale if the filesystem changes after.
pub fn resolve_destination(source: &Path, destination: &Path) -> PathBuf {
    if destination.is_dir() {
        // String concatenation rather than Path::join: an absolute source must not
        // replace the directory prefix.
        let mut joined = OsString::from(destination.as_os_str());
        joined.push(MAIN_SEPARATOR_STR);
        joined.push(source.as_os_str());
        let resolved = PathBuf::from(joined);
        debug!(dest = %destination.display(), resolved = %resolved.display(), "Destination is a directory");
        resolved
    } else {
        destination.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directory_destination_appends_source_as_given() {
        let td = tempdir().unwrap();
        let got = resolve_destination(Path::new("sub/a.txt"), td.path());
        let expected = format!("{}{}sub/a.txt", td.path().display(), MAIN_SEPARATOR_STR);
        assert_eq!(got, PathBuf::from(expected));
    }

    #[test]
    fn missing_destination_is_verbatim() {
        let td = tempdir().unwrap();
        let dest = td.path().join("new-name.bin");
        assert_eq!(resolve_destination(Path::new("a.bin"), &dest), dest);
    }
}
