//! Paginated display of a text file.
//!
//! `Pager` turns any `BufRead` into a lazy, single-pass sequence of `PageEvent`s:
//! one `Line` per read of at most `SHOW_READ_SIZE` bytes (a physical line, or a piece
//! of a longer one) and a `Pause` after every `lines_per_page` reads, except at end
//! of input. Pieces of a long line are printed back to back, so the text stays intact. `show` drives it against a file, writing lines to an
//! output and waiting for one line of input at each pause.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{FileOpError, OpResult};
use crate::shutdown;

use super::helpers::{io_failure, open_failure};
use super::text::ensure_text_file;

/// Prompt printed at each pause.
pub const PAGE_PROMPT: &str = "-- Press Enter for next page --";

/// Longest single read; a longer line counts once per piece toward the page size.
pub const SHOW_READ_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// One line, or one piece of a line longer than the read size, newline included when present.
    Line(Vec<u8>),
    /// A full page was printed and more lines follow.
    Pause,
}

pub struct Pager<R> {
    reader: R,
    per_page: NonZeroUsize,
    max_read: NonZeroUsize,
    on_page: usize,
    done: bool,
}

impl<R: BufRead> Pager<R> {
    pub fn new(reader: R, per_page: NonZeroUsize) -> Self {
        let max_read = NonZeroUsize::new(SHOW_READ_SIZE).unwrap_or(NonZeroUsize::MIN);
        Self::with_read_size(reader, per_page, max_read)
    }

    pub fn with_read_size(reader: R, per_page: NonZeroUsize, max_read: NonZeroUsize) -> Self {
        Self {
            reader,
            per_page,
            max_read,
            on_page: 0,
            done: false,
        }
    }

    /// Up to `max_read` bytes, stopping after the first newline.
    fn read_piece(&mut self) -> io::Result<Vec<u8>> {
        let limit = self.max_read.get();
        let mut piece = Vec::new();
        while piece.len() < limit {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            let window = &available[..available.len().min(limit - piece.len())];
            let (take, ends_line) = match window.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (window.len(), false),
            };
            piece.extend_from_slice(&window[..take]);
            self.reader.consume(take);
            if ends_line {
                break;
            }
        }
        Ok(piece)
    }

    fn has_more(&mut self) -> io::Result<bool> {
        Ok(!self.reader.fill_buf()?.is_empty())
    }

    fn next_event(&mut self) -> io::Result<Option<PageEvent>> {
        if self.done {
            return Ok(None);
        }
        if self.on_page == self.per_page.get() {
            self.on_page = 0;
            if self.has_more()? {
                return Ok(Some(PageEvent::Pause));
            }
        }
        let line = self.read_piece()?;
        if line.is_empty() {
            self.done = true;
            return Ok(None);
        }
        self.on_page += 1;
        Ok(Some(PageEvent::Line(line)))
    }
}

impl<R: BufRead> Iterator for Pager<R> {
    type Item = io::Result<PageEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Ok(ev) => ev.map(Ok),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Counts reported after a `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowReport {
    pub lines: usize,
    pub pauses: usize,
}

/// Page `path` to `output`, reading one acknowledgment line from `input` per pause.
/// End of input on `input` counts as an acknowledgment.
pub fn show<I: BufRead, O: Write>(
    config: &Config,
    path: &Path,
    lines_per_page: i64,
    input: &mut I,
    output: &mut O,
) -> OpResult<ShowReport> {
    ensure_text_file(config, path)?;
    let per_page = usize::try_from(lines_per_page)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(FileOpError::InvalidPageSize(lines_per_page))?;

    let file = File::open(path).map_err(open_failure(path))?;
    let stdout_failure = |e: io::Error| FileOpError::Io {
        op: "write output for",
        path: path.to_path_buf(),
        source: e,
    };

    let mut report = ShowReport::default();
    let max_read = NonZeroUsize::new(config.show_read_size).unwrap_or(NonZeroUsize::MIN);
    for event in Pager::with_read_size(BufReader::new(file), per_page, max_read) {
        match event.map_err(io_failure("read", path))? {
            PageEvent::Line(line) => {
                output.write_all(&line).map_err(stdout_failure)?;
                report.lines += 1;
            }
            PageEvent::Pause => {
                writeln!(output, "{PAGE_PROMPT}").map_err(stdout_failure)?;
                output.flush().map_err(stdout_failure)?;
                let mut ack = String::new();
                // Content ignored; a read error is treated like EOF.
                if let Err(e) = input.read_line(&mut ack) {
                    debug!(error = %e, "Could not read page acknowledgment; continuing");
                }
                report.pauses += 1;
                if shutdown::is_requested() {
                    debug!(path = %path.display(), "Paging stopped by interrupt");
                    return Err(FileOpError::Interrupted);
                }
            }
        }
    }
    output.flush().map_err(stdout_failure)?;

    info!(path = %path.display(), lines = report.lines, pauses = report.pauses, "Showed file");
    Ok(report)
}
