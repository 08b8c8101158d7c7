//! Notebook and note CRUD over the store
//!
//! Every operation loads the store fresh, mutates it in memory and writes it
//! back. An operation that fails returns before anything is written.

use crate::domain::{IdGenerator, Note, NoteFields, NotePatch, Notebook, StoreData};
use crate::error::{NotekeeperError, Result};
use crate::infrastructure::{SlotStorage, Store};
use chrono::Utc;
use tracing::{debug, info};

fn system_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// CRUD façade mediating all reads and writes against the store
pub struct Repository<S: SlotStorage> {
    store: Store<S>,
    ids: IdGenerator,
    now: fn() -> i64,
}

impl<S: SlotStorage> Repository<S> {
    /// Initialize the store slot if needed and wrap it
    pub fn open(store: Store<S>) -> Result<Self> {
        Self::with_clock(store, system_millis)
    }

    /// Like [`Repository::open`], reading time from `now` (milliseconds)
    pub fn with_clock(store: Store<S>, now: fn() -> i64) -> Result<Self> {
        store.initialize()?;
        Ok(Repository {
            store,
            ids: IdGenerator::new(),
            now,
        })
    }

    /// Run one load, mutate, save cycle
    fn transact<T>(&self, mutate: impl FnOnce(&mut StoreData) -> Result<T>) -> Result<T> {
        let mut data = self.store.load()?;
        let value = mutate(&mut data)?;
        self.store.save(&data)?;
        Ok(value)
    }

    /// An id no notebook or note in `data` carries yet
    fn fresh_id(&self, data: &StoreData) -> Result<String> {
        let now = (self.now)();
        self.ids
            .next(now, data.max_numeric_id(), |id| data.contains_id(id))
            .ok_or_else(|| NotekeeperError::Collision(now.to_string()))
    }

    pub fn create_notebook(&self, name: &str) -> Result<Notebook> {
        let notebook = self.transact(|data| {
            let notebook = Notebook::new(self.fresh_id(data)?, name);
            data.notebooks.push(notebook.clone());
            Ok(notebook)
        })?;

        info!(notebook_id = %notebook.id, "created notebook");
        Ok(notebook)
    }

    /// All notebooks in creation order
    pub fn list_notebooks(&self) -> Result<Vec<Notebook>> {
        Ok(self.store.load()?.notebooks)
    }

    /// Add a note at the front of a notebook
    pub fn create_note(&self, notebook_id: &str, fields: NoteFields) -> Result<Note> {
        let note = self.transact(|data| {
            if data.find_notebook(notebook_id).is_none() {
                return Err(NotekeeperError::notebook_not_found(notebook_id));
            }

            let note = Note::new(self.fresh_id(data)?, notebook_id, fields, (self.now)());
            if let Some(notebook) = data.find_notebook_mut(notebook_id) {
                notebook.prepend(note.clone());
            }
            Ok(note)
        })?;

        info!(notebook_id, note_id = %note.id, "created note");
        Ok(note)
    }

    /// Notes of one notebook, newest first
    pub fn list_notes(&self, notebook_id: &str) -> Result<Vec<Note>> {
        let data = self.store.load()?;
        let notebook = data
            .find_notebook(notebook_id)
            .ok_or_else(|| NotekeeperError::notebook_not_found(notebook_id))?;
        Ok(notebook.notes.clone())
    }

    /// Look up a single note in any notebook
    pub fn get_note(&self, note_id: &str) -> Result<Note> {
        let data = self.store.load()?;
        data.find_note(note_id)
            .cloned()
            .ok_or_else(|| NotekeeperError::note_not_found(note_id))
    }

    pub fn rename_notebook(&self, notebook_id: &str, name: &str) -> Result<Notebook> {
        let notebook = self.transact(|data| {
            let notebook = data
                .find_notebook_mut(notebook_id)
                .ok_or_else(|| NotekeeperError::notebook_not_found(notebook_id))?;
            notebook.name = name.to_string();
            Ok(notebook.clone())
        })?;

        debug!(notebook_id, "renamed notebook");
        Ok(notebook)
    }

    /// Change the title and/or text of a note
    pub fn update_note(&self, note_id: &str, patch: NotePatch) -> Result<Note> {
        let note = self.transact(|data| {
            let note = data
                .find_note_mut(note_id)
                .ok_or_else(|| NotekeeperError::note_not_found(note_id))?;
            note.apply(patch);
            Ok(note.clone())
        })?;

        debug!(note_id, "updated note");
        Ok(note)
    }

    /// Remove a notebook together with all of its notes
    pub fn delete_notebook(&self, notebook_id: &str) -> Result<()> {
        let removed = self.transact(|data| {
            let index = data
                .find_notebook_index(notebook_id)
                .ok_or_else(|| NotekeeperError::notebook_not_found(notebook_id))?;
            Ok(data.notebooks.remove(index))
        })?;

        info!(notebook_id, notes = removed.notes.len(), "deleted notebook");
        Ok(())
    }

    /// Remove a note and return the notes left in its notebook
    pub fn delete_note(&self, notebook_id: &str, note_id: &str) -> Result<Vec<Note>> {
        let remaining = self.transact(|data| {
            let notebook = data
                .find_notebook_mut(notebook_id)
                .ok_or_else(|| NotekeeperError::notebook_not_found(notebook_id))?;
            let index = notebook
                .find_note_index(note_id)
                .ok_or_else(|| NotekeeperError::note_not_found(note_id))?;
            notebook.notes.remove(index);
            Ok(notebook.notes.clone())
        })?;

        info!(notebook_id, note_id, remaining = remaining.len(), "deleted note");
        Ok(remaining)
    }
}
