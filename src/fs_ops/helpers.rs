//! I/O helper utilities.
//!
//! Turns io::Error values into actionable text (OS message plus a platform hint)
//! and provides `map_err` adapters that wrap them into `FileOpError`.
//!
//! Usage:
//!   fs::remove_file(p).map_err(io_failure("delete", p))?;

use std::io;
use std::path::Path;

use crate::errors::FileOpError;

/// Platform-aware hint for a raw OS error code.
#[cfg(unix)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
        libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
        libc::EBUSY => Some("resource busy; ensure no other process is writing"),
        libc::ENOENT => Some("path not found; verify it exists"),
        libc::EEXIST => Some("already exists; pick another name or remove the target"),
        libc::EISDIR => Some("is a directory; this tool only works on single files"),
        libc::ENOTDIR => Some("a leading path component is not a directory"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
        libc::EMFILE => Some("process file descriptor limit reached"),
        _ => None,
    }
}

#[cfg(windows)]
fn hint_for_code(code: i32) -> Option<&'static str> {
    // Common Win32 errors
    match code {
        5 => Some("access denied; check permissions"),
        17 => Some("not same device; cross-filesystem move"),
        32 => Some("sharing violation; file is in use"),
        2 | 3 => Some("path not found; verify it exists"),
        80 => Some("already exists; pick another name"),
        112 => Some("insufficient disk space"),
        206 => Some("filename or path too long (MAX_PATH exceeded)"),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn hint_for_code(_code: i32) -> Option<&'static str> {
    None
}

fn hint_for_kind(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; remove or choose another name"),
        io::ErrorKind::WriteZero => Some("short write; the device accepted fewer bytes than requested"),
        io::ErrorKind::OutOfMemory => Some("out of memory"),
        _ => None,
    }
}

/// Render an io::Error as "<os message> (<hint>) [os code: N]".
pub fn describe_io_error(e: &io::Error) -> String {
    let mut msg = e.to_string();
    match e.raw_os_error() {
        Some(code) => {
            if let Some(hint) = hint_for_code(code) {
                msg.push_str(&format!(" ({hint})"));
            }
            msg.push_str(&format!(" [os code: {code}]"));
        }
        None => {
            if let Some(hint) = hint_for_kind(e.kind()) {
                msg.push_str(&format!(" ({hint})"));
            }
        }
    }
    msg
}

/// Adapter for `.map_err(...)`: any io::Error becomes `FileOpError::Io`.
pub fn io_failure<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> FileOpError + 'a {
    move |source: io::Error| FileOpError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Like `io_failure`, but a missing path becomes `FileOpError::NotFound`.
pub fn io_failure_or_not_found<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FileOpError + 'a {
    move |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            FileOpError::NotFound(path.to_path_buf())
        } else {
            FileOpError::Io {
                op,
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Adapter for open failures of a file the operation edits in place.
pub fn open_failure<'a>(path: &'a Path) -> impl FnOnce(io::Error) -> FileOpError + 'a {
    move |source: io::Error| FileOpError::OpenFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Adapter for write failures; the message says the target may be partially written.
pub fn write_failure<'a>(path: &'a Path) -> impl FnOnce(io::Error) -> FileOpError + 'a {
    move |source: io::Error| FileOpError::WriteFailed {
        path: path.to_path_buf(),
        source,
    }
}
