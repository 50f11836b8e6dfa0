//! CLI definition and command routing.
//!
//! Global flags are parsed by clap. Everything from the first positional word on is
//! taken raw and routed by `route`, which keeps the tool's own conventions:
//! - `<verb> /h` prints that verb's usage, a bare `/h` lists all verbs.
//! - A verb with too few arguments prints its usage and does nothing else.
//! - Extra arguments are ignored.

use clap::{Parser, ValueHint};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::types::{Config, LogLevel, TextPolicy};

/// Help switch recognised in place of a verb or as the only argument after one.
pub const HELP_SWITCH: &str = "/h";

/// Small file manager: create, delete, rename, copy, move, append, insert, clear, show.
/// Flags go before the command; run `pofm /h` for the command list.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Manage single files from the command line")]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Also inspect file content (printable ASCII only) before treating a .txt file as text.
    #[arg(long, help = "Check file content as well as the .txt suffix for text commands")]
    pub sniff: bool,

    /// Exit with status 1 when the command fails (default: always 0).
    #[arg(long, help = "Exit non-zero when the command fails")]
    pub strict_exit: bool,

    /// The command and its arguments, e.g. `copy a.txt backup/`.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.sniff {
            cfg.text_policy = TextPolicy::ExtensionAndContent;
        }
        if self.strict_exit {
            cfg.strict_exit = true;
        }
    }

    pub fn invocation(&self) -> Invocation {
        route(&self.words)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

/// The file commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Delete,
    Rename,
    Copy,
    Move,
    Append,
    Insert,
    Clear,
    Show,
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Create,
        Verb::Delete,
        Verb::Rename,
        Verb::Copy,
        Verb::Move,
        Verb::Append,
        Verb::Insert,
        Verb::Clear,
        Verb::Show,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Delete => "delete",
            Verb::Rename => "rename",
            Verb::Copy => "copy",
            Verb::Move => "move",
            Verb::Append => "append",
            Verb::Insert => "insert",
            Verb::Clear => "clear",
            Verb::Show => "show",
        }
    }

    /// Number of required arguments after the verb.
    pub fn arity(self) -> usize {
        match self {
            Verb::Create | Verb::Delete | Verb::Clear => 1,
            Verb::Rename | Verb::Copy | Verb::Move | Verb::Append | Verb::Show => 2,
            Verb::Insert => 3,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Verb {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| format!("unknown command: '{s}'"))
    }
}

/// A fully argumented command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { path: PathBuf },
    Delete { path: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
    Copy { source: PathBuf, destination: PathBuf },
    Move { source: PathBuf, destination: PathBuf },
    Append { path: PathBuf, text: String },
    Insert { path: PathBuf, text: String, position: i64 },
    Clear { path: PathBuf },
    Show { path: PathBuf, lines_per_page: i64 },
}

impl Command {
    pub fn verb(&self) -> Verb {
        match self {
            Command::Create { .. } => Verb::Create,
            Command::Delete { .. } => Verb::Delete,
            Command::Rename { .. } => Verb::Rename,
            Command::Copy { .. } => Verb::Copy,
            Command::Move { .. } => Verb::Move,
            Command::Append { .. } => Verb::Append,
            Command::Insert { .. } => Verb::Insert,
            Command::Clear { .. } => Verb::Clear,
            Command::Show { .. } => Verb::Show,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Nothing after the flags.
    NoCommand,
    /// Bare `/h`.
    GlobalHelp,
    /// `<verb> /h`, or a verb missing arguments.
    Usage(Verb),
    /// `<word> /h` for a word that is not a verb.
    UnknownHelp(String),
    /// A verb that is not known.
    Unknown(String),
    /// A numeric argument that does not parse.
    BadNumber { verb: Verb, value: String },
    Run(Command),
}

/// Route the raw words following the global flags.
pub fn route(words: &[String]) -> Invocation {
    let Some((first, rest)) = words.split_first() else {
        return Invocation::NoCommand;
    };

    if rest.len() == 1 && rest[0] == HELP_SWITCH {
        if first == HELP_SWITCH {
            return Invocation::GlobalHelp;
        }
        return match first.parse::<Verb>() {
            Ok(verb) => Invocation::Usage(verb),
            Err(_) => Invocation::UnknownHelp(first.clone()),
        };
    }
    if first == HELP_SWITCH {
        return Invocation::GlobalHelp;
    }

    let Ok(verb) = first.parse::<Verb>() else {
        return Invocation::Unknown(first.clone());
    };
    if rest.len() < verb.arity() {
        return Invocation::Usage(verb);
    }

    let path = |i: usize| PathBuf::from(&rest[i]);
    let number = |i: usize| {
        rest[i].trim().parse::<i64>().map_err(|_| Invocation::BadNumber {
            verb,
            value: rest[i].clone(),
        })
    };

    let command = match verb {
        Verb::Create => Command::Create { path: path(0) },
        Verb::Delete => Command::Delete { path: path(0) },
        Verb::Rename => Command::Rename {
            from: path(0),
            to: path(1),
        },
        Verb::Copy => Command::Copy {
            source: path(0),
            destination: path(1),
        },
        Verb::Move => Command::Move {
            source: path(0),
            destination: path(1),
        },
        Verb::Append => Command::Append {
            path: path(0),
            text: rest[1].clone(),
        },
        Verb::Insert => match number(2) {
            Ok(position) => Command::Insert {
                path: path(0),
                text: rest[1].clone(),
                position,
            },
            Err(bad) => return bad,
        },
        Verb::Clear => Command::Clear { path: path(0) },
        Verb::Show => match number(1) {
            Ok(lines_per_page) => Command::Show {
                path: path(0),
                lines_per_page,
            },
            Err(bad) => return bad,
        },
    };
    Invocation::Run(command)
}
