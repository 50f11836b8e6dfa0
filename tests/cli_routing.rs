use clap::Parser;
use std::path::PathBuf;

use pofm::cli::{Args, Command, Invocation, Verb, route};
use pofm::{Config, LogLevel, TextPolicy};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_command_line() {
    assert_eq!(route(&[]), Invocation::NoCommand);
}

#[test]
fn help_switch_forms() {
    assert_eq!(route(&words(&["/h"])), Invocation::GlobalHelp);
    assert_eq!(route(&words(&["/h", "/h"])), Invocation::GlobalHelp);
    assert_eq!(route(&words(&["copy", "/h"])), Invocation::Usage(Verb::Copy));
    assert_eq!(
        route(&words(&["frobnicate", "/h"])),
        Invocation::UnknownHelp("frobnicate".into())
    );
}

#[test]
fn missing_arguments_print_usage() {
    assert_eq!(route(&words(&["copy", "a.txt"])), Invocation::Usage(Verb::Copy));
    assert_eq!(route(&words(&["create"])), Invocation::Usage(Verb::Create));
    assert_eq!(
        route(&words(&["insert", "f.txt", "hello"])),
        Invocation::Usage(Verb::Insert)
    );
}

#[test]
fn unknown_verb_is_reported() {
    assert_eq!(
        route(&words(&["explode", "a.txt"])),
        Invocation::Unknown("explode".into())
    );
    // Verbs are case-sensitive.
    assert_eq!(route(&words(&["COPY", "a", "b"])), Invocation::Unknown("COPY".into()));
}

#[test]
fn numeric_arguments_are_parsed() {
    assert_eq!(
        route(&words(&["insert", "f.txt", "hi there", "12"])),
        Invocation::Run(Command::Insert {
            path: PathBuf::from("f.txt"),
            text: "hi there".into(),
            position: 12,
        })
    );
    assert_eq!(
        route(&words(&["show", "f.txt", "-3"])),
        Invocation::Run(Command::Show {
            path: PathBuf::from("f.txt"),
            lines_per_page: -3,
        })
    );
    assert_eq!(
        route(&words(&["show", "f.txt", "ten"])),
        Invocation::BadNumber {
            verb: Verb::Show,
            value: "ten".into(),
        }
    );
}

#[test]
fn extra_arguments_are_ignored() {
    assert_eq!(
        route(&words(&["delete", "a.txt", "b.txt", "c.txt"])),
        Invocation::Run(Command::Delete {
            path: PathBuf::from("a.txt")
        })
    );
}

#[test]
fn global_flags_come_before_the_command() {
    let args = Args::parse_from(["pofm", "--sniff", "--strict-exit", "--log-level", "info", "move", "a", "b"]);
    assert_eq!(args.words, words(&["move", "a", "b"]));
    assert_eq!(
        args.invocation(),
        Invocation::Run(Command::Move {
            source: "a".into(),
            destination: "b".into(),
        })
    );

    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.text_policy, TextPolicy::ExtensionAndContent);
    assert!(cfg.strict_exit);
}

#[test]
fn debug_flag_wins_over_log_level() {
    let args = Args::parse_from(["pofm", "-d", "--log-level", "quiet", "clear", "x.txt"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
}

#[test]
fn hyphen_values_after_command_reach_router() {
    let args = Args::parse_from(["pofm", "append", "notes.txt", "--not-a-flag"]);
    assert_eq!(
        args.invocation(),
        Invocation::Run(Command::Append {
            path: "notes.txt".into(),
            text: "--not-a-flag".into(),
        })
    );
}
