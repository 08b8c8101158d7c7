//! Root of the persisted store and its lookups
//!
//! All lookups are linear scans; first match wins.

use crate::domain::{Note, Notebook};
use serde::{Deserialize, Serialize};

/// The single persisted root structure containing all notebooks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    pub notebooks: Vec<Notebook>,
}

impl StoreData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_notebook(&self, notebook_id: &str) -> Option<&Notebook> {
        self.notebooks.iter().find(|nb| nb.id == notebook_id)
    }

    pub fn find_notebook_mut(&mut self, notebook_id: &str) -> Option<&mut Notebook> {
        self.notebooks.iter_mut().find(|nb| nb.id == notebook_id)
    }

    pub fn find_notebook_index(&self, notebook_id: &str) -> Option<usize> {
        self.notebooks.iter().position(|nb| nb.id == notebook_id)
    }

    /// Scan notebooks in order, then the notes within each
    pub fn find_note(&self, note_id: &str) -> Option<&Note> {
        self.notebooks
            .iter()
            .flat_map(|nb| nb.notes.iter())
            .find(|note| note.id == note_id)
    }

    pub fn find_note_mut(&mut self, note_id: &str) -> Option<&mut Note> {
        self.notebooks
            .iter_mut()
            .flat_map(|nb| nb.notes.iter_mut())
            .find(|note| note.id == note_id)
    }

    /// Whether any notebook or note already uses this id
    pub fn contains_id(&self, id: &str) -> bool {
        self.notebooks
            .iter()
            .any(|nb| nb.id == id || nb.notes.iter().any(|note| note.id == id))
    }

    /// Greatest id that parses as an integer, across notebooks and notes
    pub fn max_numeric_id(&self) -> Option<i64> {
        self.notebooks
            .iter()
            .flat_map(|nb| {
                std::iter::once(nb.id.as_str()).chain(nb.notes.iter().map(|n| n.id.as_str()))
            })
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
    }

    /// Check that every note points back at the notebook holding it.
    /// Returns a description of the first offending note.
    pub fn check_back_references(&self) -> Result<(), String> {
        for notebook in &self.notebooks {
            if let Some(note) = notebook
                .notes
                .iter()
                .find(|note| note.notebook_id != notebook.id)
            {
                return Err(format!(
                    "note {} is stored in notebook {} but references notebook {}",
                    note.id, notebook.id, note.notebook_id
                ));
            }
        }
        Ok(())
    }
}
