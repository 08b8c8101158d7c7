//! Notebook and note records

use serde::{Deserialize, Serialize};

/// A titled piece of text belonging to exactly one notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    #[serde(rename = "notebookId")]
    pub notebook_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// Creation time in milliseconds since the Unix epoch
    #[serde(rename = "postedOn")]
    pub posted_on: i64,
}

/// Caller-supplied content for a new note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub text: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        NoteFields {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Fields a note update may change. `None` leaves the field as it is.
///
/// Identity and creation time are not representable here, so an update
/// can never rewrite `id`, `notebookId` or `postedOn`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}

impl Note {
    /// Build a note from its generated identity and caller content
    pub fn new(id: String, notebook_id: &str, fields: NoteFields, posted_on: i64) -> Self {
        Note {
            id,
            notebook_id: notebook_id.to_string(),
            title: fields.title,
            text: fields.text,
            posted_on,
        }
    }

    /// Apply a patch in place, caller-supplied fields win
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
    }
}

/// A named container owning its notes, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Notebook {
    pub fn new(id: String, name: &str) -> Self {
        Notebook {
            id,
            name: name.to_string(),
            notes: Vec::new(),
        }
    }

    /// Position of a note within this notebook
    pub fn find_note_index(&self, note_id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == note_id)
    }

    /// New notes sort first
    pub fn prepend(&mut self, note: Note) {
        self.notes.insert(0, note);
    }
}
