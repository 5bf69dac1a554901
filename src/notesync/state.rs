//! # Client State
//!
//! The client keeps one [`ClientState`] value for the whole session. It is only ever
//! replaced through [`reduce`], a pure function from the current state and a tagged
//! [`Action`] to the next state. Nothing in here touches the network or logs.
//!
//! Actions use the same tagged shape on the wire (`{"type": "SET_NOTES", "notes": [...]}`)
//! so they can be recorded or replayed. Tags this client does not know about decode to
//! [`Action::Unknown`] and leave the state as it was.
//!
//! The state is a cache of the remote collection. Optimistic transitions mean it can
//! differ from the backend until the next full fetch.

use crate::model::{FormField, Note, NoteForm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    pub notes: Vec<Note>,
    pub loading: bool,
    pub error: bool,
    pub form: NoteForm,
    /// While set, the form edits `note_id` instead of creating a new note.
    pub edit_note: bool,
    pub note_id: Option<String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            loading: true,
            error: false,
            form: NoteForm::default(),
            edit_note: false,
            note_id: None,
        }
    }
}

impl ClientState {
    pub fn find_note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// The note currently targeted by edit mode, if any.
    pub fn editing(&self) -> Option<&Note> {
        if !self.edit_note {
            return None;
        }
        self.note_id.as_deref().and_then(|id| self.find_note(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the collection and finish loading.
    SetNotes { notes: Vec<Note> },
    Error,
    AddNote { note: Note },
    ResetForm,
    SetInput { name: FormField, value: String },
    SetNoteEditId {
        #[serde(rename = "noteId")]
        note_id: Option<String>,
    },
    ToggleEditNote,
    /// Replace the collection after a removal. Unlike `SetNotes`, loading is left alone.
    DeleteNote { notes: Vec<Note> },
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetNotes { .. } => "SET_NOTES",
            Action::Error => "ERROR",
            Action::AddNote { .. } => "ADD_NOTE",
            Action::ResetForm => "RESET_FORM",
            Action::SetInput { .. } => "SET_INPUT",
            Action::SetNoteEditId { .. } => "SET_NOTE_EDIT_ID",
            Action::ToggleEditNote => "TOGGLE_EDIT_NOTE",
            Action::DeleteNote { .. } => "DELETE_NOTE",
            Action::Unknown => "UNKNOWN",
        }
    }
}

pub fn reduce(state: &ClientState, action: Action) -> ClientState {
    match action {
        Action::SetNotes { notes } => ClientState {
            notes,
            loading: false,
            ..state.clone()
        },
        Action::Error => ClientState {
            error: true,
            loading: false,
            ..state.clone()
        },
        Action::AddNote { note } => {
            let mut notes = state.notes.clone();
            notes.push(note);
            ClientState {
                notes,
                ..state.clone()
            }
        }
        Action::ResetForm => ClientState {
            form: NoteForm::default(),
            ..state.clone()
        },
        Action::SetInput { name, value } => ClientState {
            form: state.form.clone().with_field(name, value),
            ..state.clone()
        },
        Action::SetNoteEditId { note_id } => ClientState {
            note_id,
            ..state.clone()
        },
        Action::ToggleEditNote => ClientState {
            edit_note: !state.edit_note,
            ..state.clone()
        },
        Action::DeleteNote { notes } => ClientState {
            notes,
            ..state.clone()
        },
        Action::Unknown => state.clone(),
    }
}
