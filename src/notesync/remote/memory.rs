use super::RemoteDataService;
use crate::error::{NotesError, Result};
use crate::model::{DeleteNoteInput, Note, UpdateNoteInput};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    notes: Vec<Note>,
    fail_all: bool,
    fail_next: usize,
}

/// In-memory note service for development and testing.
/// Does NOT persist data.
///
/// Clones share the same collection, so a test can keep a handle to inspect what the
/// "backend" holds while a controller owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryService {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let service = Self::default();
        if let Ok(mut inner) = service.inner.lock() {
            inner.notes = notes;
        }
        service
    }

    /// Current server-side collection.
    pub fn notes(&self) -> Vec<Note> {
        self.lock().map(|inner| inner.notes.clone()).unwrap_or_default()
    }

    /// Make every call fail until switched off again.
    pub fn fail_all(&self, failing: bool) {
        if let Ok(mut inner) = self.lock() {
            inner.fail_all = failing;
        }
    }

    /// Make the next call fail, whatever it is.
    pub fn fail_next(&self) {
        if let Ok(mut inner) = self.lock() {
            inner.fail_next += 1;
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| NotesError::Remote("in-memory service lock poisoned".to_string()))
    }

    /// Locks the collection, consuming one injected failure if any is pending.
    fn begin(&self, operation: &str) -> Result<MutexGuard<'_, Inner>> {
        let mut inner = self.lock()?;
        if inner.fail_next > 0 {
            inner.fail_next -= 1;
            return Err(NotesError::Remote(format!("{} failed (injected)", operation)));
        }
        if inner.fail_all {
            return Err(NotesError::Remote(format!("{} failed (injected)", operation)));
        }
        Ok(inner)
    }
}

impl RemoteDataService for InMemoryService {
    async fn list(&self) -> Result<Vec<Note>> {
        let inner = self.begin("list")?;
        Ok(inner.notes.clone())
    }

    async fn create(&self, input: Note) -> Result<Note> {
        let mut inner = self.begin("create")?;
        if inner.notes.iter().any(|n| n.id == input.id) {
            return Err(NotesError::Remote(format!(
                "Note already exists: {}",
                input.id
            )));
        }
        inner.notes.push(input.clone());
        Ok(input)
    }

    async fn update(&self, input: UpdateNoteInput) -> Result<Note> {
        let mut inner = self.begin("update")?;
        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == input.id)
            .ok_or_else(|| NotesError::Remote(format!("Note not found: {}", input.id)))?;
        note.name = input.name;
        note.description = input.description;
        Ok(note.clone())
    }

    async fn delete(&self, input: DeleteNoteInput) -> Result<Note> {
        let mut inner = self.begin("delete")?;
        let position = inner
            .notes
            .iter()
            .position(|n| n.id == input.id)
            .ok_or_else(|| NotesError::Remote(format!("Note not found: {}", input.id)))?;
        Ok(inner.notes.remove(position))
    }
}

// --- Test Fixtures ---
