//! Typed error definitions for pofm.
//! Every file operation reports one of these; only the CLI layer turns them into text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::helpers::describe_io_error;

#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a text-based file.", .0.display())]
    NotATextFile(PathBuf),

    #[error("Could not open source file '{}'. {}", .path.display(), describe_io_error(.source))]
    OpenSource { path: PathBuf, source: io::Error },

    #[error("Could not open destination file '{}'. {}", .path.display(), describe_io_error(.source))]
    OpenDestination { path: PathBuf, source: io::Error },

    #[error("Could not open file '{}'. {}", .path.display(), describe_io_error(.source))]
    OpenFailed { path: PathBuf, source: io::Error },

    #[error(
        "Failed to write to '{}'; the file was left partially written. {}",
        .path.display(),
        describe_io_error(.source)
    )]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error(
        "'{}' and '{}' are the same file; nothing was changed.",
        .src.display(),
        .dest.display()
    )]
    SameFile { src: PathBuf, dest: PathBuf },

    #[error(
        "Copy into '{}' stopped part-way; the destination is incomplete. {cause}",
        .dest.display()
    )]
    IncompleteCopy {
        dest: PathBuf,
        #[source]
        cause: Box<FileOpError>,
    },

    #[error("File copy failed: {0}")]
    CopyFailed(#[source] Box<FileOpError>),

    #[error(
        "Copied '{}' to '{}' but failed to delete the source; both files now exist. {}",
        .src.display(),
        .dest.display(),
        describe_io_error(.source)
    )]
    SourceDeleteFailed {
        src: PathBuf,
        dest: PathBuf,
        source: io::Error,
    },

    #[error("Position {0} is invalid. Position cannot be negative.")]
    NegativeOffset(i64),

    #[error("Position {offset} is beyond the end of the file (length: {len}).")]
    OffsetBeyondEnd { offset: u64, len: u64 },

    #[error("Failed to allocate {requested} bytes for the content of '{}'.", .path.display())]
    AllocationFailed { path: PathBuf, requested: u64 },

    #[error("Lines per page must be a positive number, got {0}.")]
    InvalidPageSize(i64),

    #[error("Could not {op} '{}'. {}", .path.display(), describe_io_error(.source))]
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FileOpError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            FileOpError::NotFound(_) => 2,
            FileOpError::NotATextFile(_) => 10,
            FileOpError::OpenSource { .. } => 20,
            FileOpError::OpenDestination { .. } => 21,
            FileOpError::OpenFailed { .. } => 22,
            FileOpError::SameFile { .. } => 23,
            FileOpError::WriteFailed { .. } => 30,
            FileOpError::CopyFailed(_) => 31,
            FileOpError::SourceDeleteFailed { .. } => 32,
            FileOpError::IncompleteCopy { .. } => 33,
            FileOpError::NegativeOffset(_) => 40,
            FileOpError::OffsetBeyondEnd { .. } => 41,
            FileOpError::AllocationFailed { .. } => 42,
            FileOpError::InvalidPageSize(_) => 43,
            FileOpError::Io { .. } => 50,
            FileOpError::Interrupted => 130,
        }
    }

    /// Short snake_case name for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FileOpError::NotFound(_) => "not_found",
            FileOpError::NotATextFile(_) => "not_a_text_file",
            FileOpError::OpenSource { .. } => "open_source",
            FileOpError::OpenDestination { .. } => "open_destination",
            FileOpError::OpenFailed { .. } => "open_failed",
            FileOpError::SameFile { .. } => "same_file",
            FileOpError::WriteFailed { .. } => "write_failed",
            FileOpError::CopyFailed(_) => "copy_failed",
            FileOpError::SourceDeleteFailed { .. } => "source_delete_failed",
            FileOpError::IncompleteCopy { .. } => "incomplete_copy",
            FileOpError::NegativeOffset(_) => "negative_offset",
            FileOpError::OffsetBeyondEnd { .. } => "offset_beyond_end",
            FileOpError::AllocationFailed { .. } => "allocation_failed",
            FileOpError::InvalidPageSize(_) => "invalid_page_size",
            FileOpError::Io { .. } => "io",
            FileOpError::Interrupted => "interrupted",
        }
    }

    /// True when the failure left the filesystem in a state the user must clean up.
    pub fn is_partial(&self) -> bool {
        match self {
            FileOpError::WriteFailed { .. }
            | FileOpError::SourceDeleteFailed { .. }
            | FileOpError::IncompleteCopy { .. } => true,
            FileOpError::CopyFailed(inner) => inner.is_partial(),
            _ => false,
        }
    }
}

/// Result alias used by every operation in `fs_ops`.
pub type OpResult<T> = Result<T, FileOpError>;
