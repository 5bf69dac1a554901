//! # Note References
//!
//! Note ids are UUIDs, which nobody wants to type. Commands therefore accept either a
//! 1-based position in the current list (`2`) or a full id. Positions are assigned by
//! [`index_notes`] in collection order, so they match what was last displayed.

use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::state::ClientState;
use std::fmt;
use std::str::FromStr;

/// A user input to select a note, either by its list position or its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteRef {
    Position(usize),
    Id(String),
}

impl fmt::Display for NoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteRef::Position(n) => write!(f, "{}", n),
            NoteRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for NoteRef {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NotesError::InvalidCommand(
                "a note position or id is required".to_string(),
            ));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(NotesError::InvalidCommand(
                "positions start at 1".to_string(),
            )),
            Ok(n) => Ok(NoteRef::Position(n)),
            Err(_) => Ok(NoteRef::Id(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub position: usize,
    pub note: Note,
    /// The note is the current edit target.
    pub editing: bool,
}

pub fn index_notes(state: &ClientState) -> Vec<DisplayNote> {
    let editing = state.editing().map(|n| n.id.as_str());
    state
        .notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            position: i + 1,
            note: note.clone(),
            editing: editing == Some(note.id.as_str()),
        })
        .collect()
}

pub fn resolve(state: &ClientState, note_ref: &NoteRef) -> Result<DisplayNote> {
    index_notes(state)
        .into_iter()
        .find(|dn| match note_ref {
            NoteRef::Position(n) => dn.position == *n,
            NoteRef::Id(id) => &dn.note.id == id,
        })
        .ok_or_else(|| NotesError::NoteNotFound(note_ref.to_string()))
}
