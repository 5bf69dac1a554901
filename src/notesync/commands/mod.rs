//! # Command Surface
//!
//! Each user action maps to exactly one [`Command`], and each command to one controller
//! operation. This is the whole interface a presentation layer needs: parse or build a
//! `Command`, hand it to [`execute`], render the returned [`CmdResult`].
//!
//! Commands never print. Outcomes come back as listed notes, an optional state snapshot
//! and leveled [`CmdMessage`]s.
//!
//! ## Errors
//!
//! Validation failures and bad note references are returned as `Err` so the caller can
//! block on them. A failed remote call is not: the controller has already raised the
//! `error` flag, so the command reports it as an error message and still returns the
//! local view.

use crate::controller::{ReconcilePolicy, SyncController};
use crate::error::{NotesError, Result};
use crate::index::{DisplayNote, NoteRef};
use crate::model::FormField;
use crate::remote::RemoteDataService;
use crate::state::ClientState;
use std::str::FromStr;

pub mod delete;
pub mod edit;
pub mod form;
pub mod status;
pub mod sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_notes: Option<Vec<DisplayNote>>,
    pub state: Option<ClientState>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = Some(notes);
        self
    }

    pub fn with_state(mut self, state: ClientState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    List,
    Input(FormField, String),
    Submit,
    Add { name: String, description: String },
    Edit(NoteRef),
    Delete(NoteRef),
    Status,
    Help,
}

impl FromStr for Command {
    type Err = NotesError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(head, rest)| (head, rest.trim()))
            .unwrap_or((line, ""));

        match head {
            "refresh" | "fetch" => Ok(Command::Refresh),
            "list" | "ls" => Ok(Command::List),
            "name" => Ok(Command::Input(FormField::Name, rest.to_string())),
            "description" | "desc" => Ok(Command::Input(FormField::Description, rest.to_string())),
            "submit" | "save" => Ok(Command::Submit),
            "add" | "n" => {
                let (name, description) = rest.split_once('|').ok_or_else(|| {
                    NotesError::InvalidCommand("usage: add <name> | <description>".to_string())
                })?;
                Ok(Command::Add {
                    name: name.trim().to_string(),
                    description: description.trim().to_string(),
                })
            }
            "edit" | "e" => Ok(Command::Edit(rest.parse()?)),
            "delete" | "rm" => Ok(Command::Delete(rest.parse()?)),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "" => Err(NotesError::InvalidCommand("empty command".to_string())),
            other => Err(NotesError::InvalidCommand(format!(
                "unknown command '{}', try 'help'",
                other
            ))),
        }
    }
}

pub const HELP: &[(&str, &str)] = &[
    ("refresh", "fetch all notes from the server"),
    ("list", "show the local notes"),
    ("name <text>", "set the form name"),
    ("desc <text>", "set the form description"),
    ("submit", "create a note from the form, or save the note being edited"),
    ("add <name> | <description>", "create a note in one step"),
    ("edit <n|id>", "start editing a note, or stop editing"),
    ("delete <n|id>", "delete a note"),
    ("status", "show form, edit mode and sync flags"),
    ("quit", "leave the session"),
];

pub async fn execute<R: RemoteDataService>(
    controller: &SyncController<R>,
    command: Command,
) -> Result<CmdResult> {
    tracing::debug!(?command, "execute");
    match command {
        Command::Refresh => sync::refresh(controller).await,
        Command::List => Ok(sync::list(controller)),
        Command::Input(field, value) => Ok(form::input(controller, field, value)),
        Command::Submit => form::submit(controller).await,
        Command::Add { name, description } => form::add(controller, name, description).await,
        Command::Edit(note_ref) => edit::toggle(controller, &note_ref),
        Command::Delete(note_ref) => delete::run(controller, &note_ref).await,
        Command::Status => Ok(status::run(controller)),
        Command::Help => Ok(status::help()),
    }
}

/// Turns a remote failure into a reported outcome; anything else is passed back up.
fn report_remote<T>(
    result: &mut CmdResult,
    policy: ReconcilePolicy,
    outcome: Result<T>,
) -> Result<Option<T>> {
    match outcome {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_remote() => {
            let consequence = match policy {
                ReconcilePolicy::KeepOptimistic => "local change kept until the next refresh",
                ReconcilePolicy::Rollback => "local change rolled back",
            };
            result.add_message(CmdMessage::error(format!("{} ({})", err, consequence)));
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
