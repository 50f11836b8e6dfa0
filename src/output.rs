//! User-facing printing.
//! Prefixed, coloured lines (`ok:`, `info:`, `warn:`, `error:`) when the stream is a
//! TTY; plain prefixes otherwise so output stays greppable.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn is_tty(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => atty::is(atty::Stream::Stdout),
        Stream::Stderr => atty::is(atty::Stream::Stderr),
    }
}

fn emit(stream: Stream, prefix: &str, painted: String, msg: &str) {
    let line = if is_tty(stream) {
        format!("{painted} {msg}")
    } else {
        format!("{prefix} {msg}")
    };
    match stream {
        Stream::Stdout => println!("{line}"),
        Stream::Stderr => eprintln!("{line}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Stdout, "info:", "info:".cyan().bold().to_string(), msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Stderr, "warn:", "warn:".yellow().bold().to_string(), msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Stderr, "error:", "error:".red().bold().to_string(), msg);
}

pub fn print_success(msg: &str) {
    emit(Stream::Stdout, "ok:", "ok:".green().bold().to_string(), msg);
}

/// Plain line, no prefix. Used for help and usage text.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
