//! Output formatting utilities

use crate::domain::{Note, Notebook};

/// Name substituted for a notebook created without one
pub const UNTITLED: &str = "Untitled";

/// Apply the display default for an empty notebook name
pub fn notebook_name_or_default(name: &str) -> &str {
    if name.trim().is_empty() {
        UNTITLED
    } else {
        name
    }
}

/// Human-readable age of a timestamp, both in milliseconds
pub fn format_relative_time(posted_on: i64, now: i64) -> String {
    let minutes = now.saturating_sub(posted_on).max(0) / 1000 / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hour ago", hours)
    } else {
        format!("{} day ago", days)
    }
}

/// Salutation for the hour of day (0-23)
pub fn greeting(hour: u32) -> String {
    let part = match hour {
        0..=4 => "Night",
        5..=11 => "Morning",
        12..=14 => "Noon",
        15..=16 => "Afternoon",
        17..=19 => "Evening",
        _ => "Night",
    };
    format!("Good {}", part)
}

/// Format the notebook overview
pub fn format_notebook_list(notebooks: &[Notebook]) -> String {
    if notebooks.is_empty() {
        return "No notebooks found".to_string();
    }

    let mut output = String::new();
    for notebook in notebooks {
        let count = notebook.notes.len();
        output.push_str(&format!(
            "{}  {}  ({} {})\n",
            notebook.id,
            notebook.name,
            count,
            if count == 1 { "note" } else { "notes" }
        ));
    }
    output
}

/// Format notes as cards, newest first as given
pub fn format_note_list(notes: &[Note], now: i64) -> String {
    if notes.is_empty() {
        return "No notes".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}  ({})\n",
            note.id,
            note.title,
            format_relative_time(note.posted_on, now)
        ));
        if let Some(first_line) = note.text.lines().next() {
            output.push_str(&format!("    {}\n", first_line));
        }
    }
    output
}

/// Format a single note in full
pub fn format_note(note: &Note, now: i64) -> String {
    format!(
        "{}\n{}  (notebook {}, {})\n\n{}\n",
        note.title,
        note.id,
        note.notebook_id,
        format_relative_time(note.posted_on, now),
        note.text
    )
}
