//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeeper")]
#[command(about = "Local notebooks and notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create, list, rename or delete notebooks
    #[command(subcommand)]
    Notebook(NotebookCommand),

    /// Create, list, show, update or delete notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotebookCommand {
    /// Create a notebook (empty name becomes "Untitled")
    Create {
        #[arg(default_value = "")]
        name: String,
    },

    /// List notebooks in creation order
    List,

    /// Rename a notebook
    Rename { id: String, name: String },

    /// Delete a notebook and all of its notes
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Create a note at the top of a notebook
    Create {
        notebook_id: String,

        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short = 'x', long, default_value = "")]
        text: String,
    },

    /// List a notebook's notes, newest first
    List { notebook_id: String },

    /// Show a single note
    Show { id: String },

    /// Change a note's title and/or text
    Update {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short = 'x', long)]
        text: Option<String>,
    },

    /// Delete a note from a notebook
    Delete { notebook_id: String, id: String },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly (light or dark)
    Set { theme: String },
}
