use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Hidden sibling temp name next to `target`.
/// Pattern: .pofm.<pid>.<nanos>.<seq>.tmp
pub(super) fn unique_temp_path(target: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".pofm.{pid}.{nanos}.{seq}.tmp");
    parent_or_cwd(target).join(tmp_name)
}

/// Directory holding `path`; a bare file name lives in the current directory.
pub(super) fn parent_or_cwd(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

pub(super) fn is_cross_device(e: &io::Error) -> bool {
    // std::io::ErrorKind has no stable CrossesDevices variant on all toolchains,
    // so detect EXDEV / ERROR_NOT_SAME_DEVICE via raw OS error codes.
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}

/// True when `other` exists and names the same file as `path` (whose metadata is
/// `path_meta`). Device and inode on Unix, canonical paths elsewhere.
#[cfg(unix)]
pub(super) fn is_same_file(path_meta: &fs::Metadata, _path: &Path, other: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match fs::metadata(other) {
        Ok(m) => m.dev() == path_meta.dev() && m.ino() == path_meta.ino(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
pub(super) fn is_same_file(_path_meta: &fs::Metadata, path: &Path, other: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(other)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = File::open(dir)?;
    f.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
