//! Text-file guard plus the simple text edits: append and clear.
//!
//! A file counts as text when its path ends in `.txt` after the last dot
//! (case-sensitive). With `TextPolicy::ExtensionAndContent` an existing file must also
//! consist of printable ASCII and whitespace only.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Config, TextPolicy};
use crate::errors::{FileOpError, OpResult};

use super::atomic::replace_contents;
use super::helpers::{open_failure, write_failure};

/// Suffix check on the raw path: the text after the last `.` must be exactly `txt`.
pub fn is_text_file(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(dot) => &bytes[dot..] == b".txt",
        None => false,
    }
}

fn is_text_byte(b: u8) -> bool {
    b.is_ascii_graphic() || b == b' ' || b.is_ascii_whitespace() || b == 0x0b
}

/// Scan the whole file; true when every byte is printable ASCII or whitespace.
pub fn looks_like_text<R: Read>(reader: R) -> io::Result<bool> {
    let mut reader = BufReader::new(reader);
    let mut buf = [0u8; 1024];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(true),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if !buf[..n].iter().all(|&b| is_text_byte(b)) {
            return Ok(false);
        }
    }
}

/// Refuse non-text files before anything touches them.
pub fn ensure_text_file(config: &Config, path: &Path) -> OpResult<()> {
    if !is_text_file(path) {
        return Err(FileOpError::NotATextFile(path.to_path_buf()));
    }
    if config.text_policy == TextPolicy::ExtensionAndContent {
        // Unreadable files are left to the operation's own open to report.
        if let Ok(f) = File::open(path) {
            if !looks_like_text(f).unwrap_or(false) {
                debug!(path = %path.display(), "Content check rejected file");
                return Err(FileOpError::NotATextFile(path.to_path_buf()));
            }
        }
    }
    Ok(())
}

/// The file must already exist; missing maps to `NotFound`, anything else to `OpenFailed`.
fn ensure_exists(path: &Path) -> OpResult<()> {
    match File::open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FileOpError::NotFound(path.to_path_buf())),
        Err(e) => Err(open_failure(path)(e)),
    }
}

/// Append `text` plus a newline to an existing text file.
pub fn append_text(config: &Config, path: &Path, text: &str) -> OpResult<()> {
    ensure_text_file(config, path)?;
    ensure_exists(path)?;

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(open_failure(path))?;
    let mut line = Vec::with_capacity(text.len() + 1);
    line.extend_from_slice(text.as_bytes());
    line.push(b'\n');
    file.write_all(&line).map_err(write_failure(path))?;

    info!(path = %path.display(), bytes = line.len(), "Appended text");
    Ok(())
}

/// Empty an existing, writable text file.
pub fn clear_file(config: &Config, path: &Path) -> OpResult<()> {
    ensure_text_file(config, path)?;
    ensure_exists(path)?;
    // Writability check; the content itself is replaced atomically below.
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(open_failure(path))?;

    replace_contents(path, &[])?;
    info!(path = %path.display(), "Cleared file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_rules() {
        assert!(is_text_file(Path::new("notes.txt")));
        assert!(is_text_file(Path::new("dir/notes.txt")));
        assert!(is_text_file(Path::new("archive.tar.txt")));
        assert!(is_text_file(Path::new(".txt")));
        assert!(!is_text_file(Path::new("notes.TXT")));
        assert!(!is_text_file(Path::new("notes.txt.bak")));
        assert!(!is_text_file(Path::new("data.bin")));
        assert!(!is_text_file(Path::new("README")));
        assert!(!is_text_file(Path::new("dir.txt/README")));
    }

    #[test]
    fn content_sniffing() {
        assert!(looks_like_text(&b"hello\tworld\r\n"[..]).unwrap());
        assert!(looks_like_text(&b""[..]).unwrap());
        assert!(!looks_like_text(&b"abc\x00def"[..]).unwrap());
        assert!(!looks_like_text(&[0xC3u8, 0xA9][..]).unwrap());
    }
}
