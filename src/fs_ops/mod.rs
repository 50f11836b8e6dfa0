//! Filesystem operations: one module per concern.

mod atomic;
mod copy;
mod file_move;
pub mod helpers;
mod lifecycle;
mod pager;
mod resolve;
mod splice;
mod text;
mod util;

pub use copy::{COPY_CHUNK_SIZE, CopyReport, copy_bytes, copy_file};
pub use file_move::{MoveMethod, MoveReport, move_file};
pub use helpers::{describe_io_error, io_failure};
pub use lifecycle::{create_file, delete_file, rename_file};
pub use pager::{PAGE_PROMPT, PageEvent, Pager, SHOW_READ_SIZE, ShowReport, show};
pub use resolve::resolve_destination;
pub use splice::insert_text;
pub use text::{append_text, clear_file, ensure_text_file, is_text_file, looks_like_text};
