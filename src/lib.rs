//! Core library for `pofm`.
//!
//! Single-file operations behind the command line: create, delete, rename, copy, move,
//! append, insert, clear and paged show. Every operation returns a typed
//! `FileOpError` on failure; rendering is left to the binary.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod help;
pub mod output;
pub mod shutdown;

pub use config::{Config, LogLevel, TextPolicy};
pub use errors::{FileOpError, OpResult};
pub use fs_ops::{
    CopyReport, MoveMethod, MoveReport, ShowReport, append_text, clear_file, copy_bytes, copy_file,
    create_file, delete_file, insert_text, is_text_file, move_file, rename_file, resolve_destination,
    show,
};
