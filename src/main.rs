use chrono::{Local, Timelike, Utc};
use clap::Parser;
use notekeeper::application::{init::init, ConfigService, Repository, ThemeService};
use notekeeper::cli::output::{greeting, notebook_name_or_default};
use notekeeper::cli::{
    format_note, format_note_list, format_notebook_list, Cli, Commands, NoteCommand,
    NotebookCommand, ThemeCommand,
};
use notekeeper::domain::{NoteFields, NotePatch, Theme};
use notekeeper::error::NotekeeperError;
use notekeeper::infrastructure::{FileSlotStorage, FileSystemWorkspace, Store, Workspace};
use notekeeper::logging::{init_logging, DEFAULT_LOG_LEVEL};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let level = FileSystemWorkspace::discover()
        .and_then(|workspace| workspace.load_config())
        .map(|config| config.log_level)
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    init_logging(&level);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_repository() -> Result<Repository<FileSlotStorage>, NotekeeperError> {
    let workspace = FileSystemWorkspace::discover()?;
    let config = workspace.load_config()?;
    Repository::open(Store::new(workspace.slots(), config.store_slot))
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn run(cli: Cli) -> Result<(), NotekeeperError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized notekeeper workspace at {}", path.display());
            Ok(())
        }
        Some(Commands::Notebook(command)) => run_notebook(command),
        Some(Commands::Note(command)) => run_note(command),
        Some(Commands::Theme { action }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let service = ThemeService::new(workspace.slots());

            let theme = match action {
                None => service.current()?,
                Some(ThemeCommand::Toggle) => service.toggle()?,
                Some(ThemeCommand::Set { theme }) => {
                    let theme = Theme::from_str(&theme).map_err(NotekeeperError::Config)?;
                    service.set(theme)?;
                    theme
                }
            };
            println!("{}", theme);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let workspace = FileSystemWorkspace::discover()?;
            let service = ConfigService::new(workspace);

            if list {
                let config = service.list()?;
                println!("store_slot = {}", config.store_slot);
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: notekeeper config [--list | <key> [<value>]]");
                println!("Valid keys: store_slot, log_level, created");
                Ok(())
            }
        }
        None => {
            let repo = open_repository()?;
            println!("{}", greeting(Local::now().hour()));
            println!();
            print!("{}", format_notebook_list(&repo.list_notebooks()?));
            println!();
            Ok(())
        }
    }
}

fn run_notebook(command: NotebookCommand) -> Result<(), NotekeeperError> {
    let repo = open_repository()?;

    match command {
        NotebookCommand::Create { name } => {
            let notebook = repo.create_notebook(notebook_name_or_default(&name))?;
            println!("Created notebook {}: {}", notebook.id, notebook.name);
        }
        NotebookCommand::List => {
            println!("{}", format_notebook_list(&repo.list_notebooks()?).trim_end());
        }
        NotebookCommand::Rename { id, name } => {
            let notebook = repo.rename_notebook(&id, notebook_name_or_default(&name))?;
            println!("Renamed notebook {}: {}", notebook.id, notebook.name);
        }
        NotebookCommand::Delete { id } => {
            repo.delete_notebook(&id)?;
            println!("Deleted notebook {}", id);
        }
    }
    Ok(())
}

fn run_note(command: NoteCommand) -> Result<(), NotekeeperError> {
    let repo = open_repository()?;

    match command {
        NoteCommand::Create {
            notebook_id,
            title,
            text,
        } => {
            let note = repo.create_note(&notebook_id, NoteFields::new(title, text))?;
            println!("Created note {}: {}", note.id, note.title);
        }
        NoteCommand::List { notebook_id } => {
            let notes = repo.list_notes(&notebook_id)?;
            println!("{}", format_note_list(&notes, now_millis()).trim_end());
        }
        NoteCommand::Show { id } => {
            let note = repo.get_note(&id)?;
            print!("{}", format_note(&note, now_millis()));
        }
        NoteCommand::Update { id, title, text } => {
            let patch = NotePatch { title, text };
            if patch.is_empty() {
                return Err(NotekeeperError::Config(
                    "Nothing to update: pass --title and/or --text".to_string(),
                ));
            }
            let note = repo.update_note(&id, patch)?;
            println!("Updated note {}: {}", note.id, note.title);
        }
        NoteCommand::Delete { notebook_id, id } => {
            let remaining = repo.delete_note(&notebook_id, &id)?;
            println!("Deleted note {}", id);
            if remaining.is_empty() {
                println!("No notes");
            }
        }
    }
    Ok(())
}
