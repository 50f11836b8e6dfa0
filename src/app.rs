//! Application orchestrator.
//! Builds the config from flags, initializes logging, installs the Ctrl-C handler,
//! routes the command line and renders every outcome as text.

use anyhow::{Context, Result};
use std::io;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use pofm::cli::{Args, Command, Invocation};
use pofm::fs_ops::{self, MoveMethod};
use pofm::output as out;
use pofm::{Config, FileOpError, LogLevel, OpResult, help, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    if let Some(lvl) = args.log_level.as_deref()
        && LogLevel::parse(lvl).is_none()
    {
        out::print_warn(&format!("Unknown log level '{lvl}'; using '{}'.", cfg.log_level));
    }

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    // Guard needs to be dropped on a hard abort to flush file logs.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            if shutdown::request() {
                if let Ok(mut g) = guard_slot.lock() {
                    let _ = g.take();
                }
                std::process::exit(130);
            }
            out::print_warn("Received interrupt; stopping at the next safe point (Ctrl-C again to abort)...");
        })
        .context("install Ctrl-C handler")?;
    }

    debug!(?args, "Starting pofm");
    let code = dispatch(&cfg, args.invocation());

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    Ok(code)
}

fn failure_code(cfg: &Config) -> ExitCode {
    if cfg.strict_exit {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn dispatch(cfg: &Config, invocation: Invocation) -> ExitCode {
    match invocation {
        Invocation::NoCommand => {
            out::print_error("No command provided. Use /h for help.");
            ExitCode::FAILURE
        }
        Invocation::GlobalHelp => {
            out::print_user(help::GLOBAL_HELP);
            ExitCode::SUCCESS
        }
        Invocation::Usage(verb) => {
            debug!(%verb, "Printing usage");
            out::print_user(help::usage(verb));
            ExitCode::SUCCESS
        }
        Invocation::UnknownHelp(word) => {
            out::print_user(&help::unknown(&word));
            ExitCode::SUCCESS
        }
        Invocation::Unknown(word) => {
            warn!(word = %word, "Unknown command");
            out::print_error(&help::unknown(&word));
            ExitCode::SUCCESS
        }
        Invocation::BadNumber { verb, value } => {
            warn!(%verb, value = %value, "Numeric argument did not parse");
            out::print_error(&format!("'{value}' is not a valid whole number."));
            out::print_user(help::usage(verb));
            ExitCode::SUCCESS
        }
        Invocation::Run(command) => {
            let verb = command.verb();
            match execute(cfg, &command) {
                Ok(message) => {
                    if let Some(msg) = message {
                        out::print_success(&msg);
                    }
                    info!(%verb, "Command completed");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    report_failure(&e);
                    failure_code(cfg)
                }
            }
        }
    }
}

/// Run one command; the returned text is the success line shown to the user.
fn execute(cfg: &Config, command: &Command) -> OpResult<Option<String>> {
    let message = match command {
        Command::Create { path } => {
            fs_ops::create_file(path)?;
            format!("File '{}' created successfully.", path.display())
        }
        Command::Delete { path } => {
            fs_ops::delete_file(path)?;
            format!("File '{}' deleted successfully.", path.display())
        }
        Command::Rename { from, to } => {
            fs_ops::rename_file(from, to)?;
            format!("File renamed from '{}' to '{}'.", from.display(), to.display())
        }
        Command::Copy { source, destination } => {
            let report = fs_ops::copy_file(cfg, source, destination)?;
            format!("File '{}' copied to '{}'.", source.display(), report.dest.display())
        }
        Command::Move { source, destination } => {
            let report = fs_ops::move_file(cfg, source, destination)?;
            if report.method == MoveMethod::Copied {
                out::print_info("Direct rename was not possible; the file was copied and the source removed.");
            }
            format!("File '{}' moved to '{}'.", source.display(), report.dest.display())
        }
        Command::Append { path, text } => {
            fs_ops::append_text(cfg, path, text)?;
            format!("Text appended to '{}'.", path.display())
        }
        Command::Insert { path, text, position } => {
            fs_ops::insert_text(cfg, path, text, *position)?;
            format!("Text inserted into '{}' at position {position}.", path.display())
        }
        Command::Clear { path } => {
            fs_ops::clear_file(cfg, path)?;
            format!("Content cleared from '{}'.", path.display())
        }
        Command::Show { path, lines_per_page } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            fs_ops::show(cfg, path, *lines_per_page, &mut stdin.lock(), &mut stdout.lock())?;
            return Ok(None);
        }
    };
    Ok(Some(message))
}

fn report_failure(e: &FileOpError) {
    let code = e.code();
    warn!(code, kind = e.kind(), partial = e.is_partial(), error = %e, "Command failed");
    out::print_error(&e.to_string());
    if e.is_partial() {
        out::print_warn("The operation stopped part-way; check the files named above before retrying.");
    }
}
