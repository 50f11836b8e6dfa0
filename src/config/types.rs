//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - TextPolicy selects how text files are recognised.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::MAX_BUFFER_BYTES_DEFAULT;
use crate::fs_ops::{COPY_CHUNK_SIZE, SHOW_READ_SIZE};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; results are already printed for the user)
    #[default]
    Quiet,
    /// Informational output
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How append/insert/clear/show decide that a file is text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Name ends in `.txt`.
    #[default]
    Extension,
    /// Name ends in `.txt` and an existing file holds only printable ASCII or whitespace.
    ExtensionAndContent,
}

/// Runtime configuration shared by all commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Text-file recognition
    pub text_policy: TextPolicy,
    /// Exit non-zero when the command fails
    pub strict_exit: bool,
    /// Chunk size for copy and move fallback
    pub copy_chunk_size: usize,
    /// Largest file an insert will load into memory
    pub max_buffer_bytes: u64,
    /// Longest single read when paging a file
    pub show_read_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Quiet,
            log_file: None,
            text_policy: TextPolicy::Extension,
            strict_exit: false,
            copy_chunk_size: COPY_CHUNK_SIZE,
            max_buffer_bytes: MAX_BUFFER_BYTES_DEFAULT,
            show_read_size: SHOW_READ_SIZE,
        }
    }
}
