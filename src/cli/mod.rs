//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, NoteCommand, NotebookCommand, ThemeCommand};
pub use output::{format_note, format_note_list, format_notebook_list};
