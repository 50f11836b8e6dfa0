//! Help and usage texts for the `/h` convention.

use crate::cli::Verb;

/// Printed for a bare `/h`.
pub const GLOBAL_HELP: &str = "Available commands:
create <filename>
delete <filename>
rename <oldname> <newname>
copy <source> <destination>
move <source> <destination>
append <filename> <text>
insert <filename> <text> <position>
clear <filename>
show <filename> <lines_per_page>";

/// Usage line plus a one-sentence description.
pub fn usage(verb: Verb) -> &'static str {
    match verb {
        Verb::Create => "Usage: create <filename>\nCreates a new file with the specified filename.",
        Verb::Delete => "Usage: delete <filename>\nDeletes the specified file.",
        Verb::Rename => "Usage: rename <oldname> <newname>\nRenames a file from oldname to newname.",
        Verb::Copy => "Usage: copy <source> <destination>\nCopies the source file to the destination.",
        Verb::Move => "Usage: move <source> <destination>\nMoves the source file to the destination.",
        Verb::Append => "Usage: append <filename> <text>\nAppends the given text to the specified file.",
        Verb::Insert => {
            "Usage: insert <filename> <text> <position>\nInserts the given text into the specified file at the position."
        }
        Verb::Clear => "Usage: clear <filename>\nClears all content from the specified file.",
        Verb::Show => {
            "Usage: show <filename> <lines_per_page>\nDisplays content of the specified file with pagination."
        }
    }
}

/// Help for a word that is not a verb.
pub fn unknown(word: &str) -> String {
    format!("Unknown command '{word}'. Use /h for help.")
}
