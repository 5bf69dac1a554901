//! # Synchronization Controller
//!
//! Every user action that touches the note collection runs the same two-phase
//! protocol:
//!
//! 1. apply the expected result locally (optimistic transition through the [`Store`]),
//! 2. issue the remote call,
//! 3. reconcile: on success finish the flow, on failure raise the `error` flag.
//!
//! The local state is therefore updated before the backend has answered, and the
//! presentation layer can render it while the call is in flight.
//!
//! ## Failed Mutations
//!
//! What happens to an optimistic change whose remote call fails is governed by
//! [`ReconcilePolicy`]:
//!
//! - `KeepOptimistic` (default): the change stays. Local state can remain diverged
//!   from the backend until the next [`SyncController::fetch_all`].
//! - `Rollback`: a compensating transition is dispatched, computed against the state
//!   at the time of failure so that unrelated changes made meanwhile survive.
//!
//! Either way the failure is logged, `ERROR` is dispatched and the error is returned.

use crate::error::{NotesError, Result};
use crate::model::{ClientId, DeleteNoteInput, FormField, Note, NoteForm, UpdateNoteInput};
use crate::remote::RemoteDataService;
use crate::state::{Action, ClientState};
use crate::store::Store;
use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS: &str = "please enter name and description";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReconcilePolicy {
    #[default]
    KeepOptimistic,
    Rollback,
}

pub struct SyncController<R: RemoteDataService> {
    remote: R,
    store: Store,
    client_id: ClientId,
    policy: ReconcilePolicy,
}

impl<R: RemoteDataService> SyncController<R> {
    pub fn new(remote: R, client_id: ClientId) -> Self {
        Self {
            remote,
            store: Store::default(),
            client_id,
            policy: ReconcilePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReconcilePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    pub fn state(&self) -> ClientState {
        self.store.snapshot()
    }

    /// Replace the local collection with the remote one.
    ///
    /// If the note under edit is gone from the fetched collection, edit mode is left
    /// and the form discarded.
    pub async fn fetch_all(&self) -> Result<()> {
        match self.remote.list().await {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "fetched notes");
                self.store.dispatch(Action::SetNotes { notes });
                self.leave_vanished_edit();
                Ok(())
            }
            Err(err) => Err(self.remote_failed("list", err, |_| None)),
        }
    }

    pub async fn create(&self, form: NoteForm) -> Result<Note> {
        validate(&form)?;

        let note = Note::new(&self.client_id, form.name, form.description);
        self.store.dispatch(Action::AddNote { note: note.clone() });
        self.store.dispatch(Action::ResetForm);

        match self.remote.create(note.clone()).await {
            Ok(saved) => {
                tracing::debug!(id = %saved.id, "note created");
                Ok(saved)
            }
            Err(err) => Err(self.remote_failed("create", err, |current| {
                current.find_note(&note.id)?;
                let notes = without(&current.notes, &note.id);
                Some(Action::DeleteNote { notes })
            })),
        }
    }

    pub async fn delete(&self, note: &Note) -> Result<()> {
        let state = self.store.snapshot();
        if state.edit_note && state.note_id.as_deref() == Some(note.id.as_str()) {
            return Err(NotesError::Validation(
                "cannot delete a note while it is being edited".to_string(),
            ));
        }

        let position = state.notes.iter().position(|n| n.id == note.id);
        self.store.dispatch(Action::DeleteNote {
            notes: without(&state.notes, &note.id),
        });

        let input = DeleteNoteInput {
            id: note.id.clone(),
        };
        match self.remote.delete(input).await {
            Ok(_) => {
                tracing::debug!(id = %note.id, "note deleted");
                Ok(())
            }
            Err(err) => Err(self.remote_failed("delete", err, |current| {
                let removed = state.notes.get(position?)?;
                if current.find_note(&removed.id).is_some() {
                    return None;
                }
                let mut notes = current.notes.clone();
                let at = position?.min(notes.len());
                notes.insert(at, removed.clone());
                Some(Action::SetNotes { notes })
            })),
        }
    }

    pub async fn update(&self, form: NoteForm, note_id: &str) -> Result<Note> {
        validate(&form)?;

        let state = self.store.snapshot();
        let previous = state.find_note(note_id).cloned();
        let notes = with_content(&state.notes, note_id, &form.name, &form.description);
        self.store.dispatch(Action::SetNotes { notes });

        let input = UpdateNoteInput {
            id: note_id.to_string(),
            name: form.name,
            description: form.description,
        };
        match self.remote.update(input).await {
            Ok(saved) => {
                tracing::debug!(id = %saved.id, "note updated");
                self.store.dispatch(Action::ToggleEditNote);
                self.store.dispatch(Action::ResetForm);
                self.store.dispatch(Action::SetNoteEditId { note_id: None });
                Ok(saved)
            }
            Err(err) => Err(self.remote_failed("update", err, move |current| {
                let previous = previous?;
                current.find_note(&previous.id)?;
                let notes = with_content(
                    &current.notes,
                    &previous.id,
                    &previous.name,
                    &previous.description,
                );
                Some(Action::SetNotes { notes })
            })),
        }
    }

    /// Enter edit mode for `note`, or leave it if already editing.
    ///
    /// Entering preloads the form with the note's fields. Leaving discards the form
    /// regardless of which note is passed.
    pub fn toggle_edit(&self, note: &Note) {
        if !self.store.snapshot().edit_note {
            self.store.dispatch(Action::SetNoteEditId {
                note_id: Some(note.id.clone()),
            });
            self.set_input(FormField::Name, note.name.clone());
            self.set_input(FormField::Description, note.description.clone());
        } else {
            self.store.dispatch(Action::SetNoteEditId { note_id: None });
            self.store.dispatch(Action::ResetForm);
        }
        self.store.dispatch(Action::ToggleEditNote);
    }

    pub fn set_input(&self, field: FormField, value: String) {
        self.store.dispatch(Action::SetInput { name: field, value });
    }

    /// Save the form: updates the note under edit, or creates a new one.
    pub async fn submit(&self) -> Result<Note> {
        let state = self.store.snapshot();
        if state.edit_note {
            let note_id = state
                .note_id
                .ok_or_else(|| NotesError::Validation("no note selected for editing".into()))?;
            self.update(state.form, &note_id).await
        } else {
            self.create(state.form).await
        }
    }

    fn leave_vanished_edit(&self) {
        let state = self.store.snapshot();
        if !state.edit_note || state.editing().is_some() {
            return;
        }
        tracing::warn!(
            note_id = state.note_id.as_deref().unwrap_or_default(),
            "note under edit no longer exists, leaving edit mode"
        );
        self.store.dispatch(Action::SetNoteEditId { note_id: None });
        self.store.dispatch(Action::ResetForm);
        self.store.dispatch(Action::ToggleEditNote);
    }

    fn remote_failed<F>(&self, operation: &str, err: NotesError, rollback: F) -> NotesError
    where
        F: FnOnce(&ClientState) -> Option<Action>,
    {
        tracing::warn!(operation, error = %err, "remote call failed");
        if self.policy == ReconcilePolicy::Rollback {
            if let Some(action) = rollback(&self.store.snapshot()) {
                tracing::info!(operation, "rolling back optimistic change");
                self.store.dispatch(action);
            }
        }
        self.store.dispatch(Action::Error);
        err
    }
}

fn validate(form: &NoteForm) -> Result<()> {
    if form.is_complete() {
        Ok(())
    } else {
        Err(NotesError::Validation(MISSING_FIELDS.to_string()))
    }
}

fn without(notes: &[Note], id: &str) -> Vec<Note> {
    notes.iter().filter(|n| n.id != id).cloned().collect()
}

fn with_content(notes: &[Note], id: &str, name: &str, description: &str) -> Vec<Note> {
    notes
        .iter()
        .map(|n| {
            if n.id == id {
                Note {
                    name: name.to_string(),
                    description: description.to_string(),
                    ..n.clone()
                }
            } else {
                n.clone()
            }
        })
        .collect()
}
