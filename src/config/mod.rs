//! Config module.
//! Provides the runtime configuration type, log levels and path safety helpers.
//! Values come from defaults overridden by command-line flags; no config file is read.

pub mod paths;
pub mod types;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel, TextPolicy};

/// Upper bound for the in-memory buffer an insert may allocate (1 GiB).
pub const MAX_BUFFER_BYTES_DEFAULT: u64 = 1 << 30;
