use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifies the client session that created a note.
///
/// Generated once at startup and handed to the controller; every note created
/// during the session carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Note {
    /// A fresh, not yet completed note with a new UUID.
    pub fn new(client_id: &ClientId, name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id: client_id.to_string(),
            name,
            description,
            completed: false,
        }
    }
}

/// Pending user input, shared by the create and edit flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteForm {
    pub name: String,
    pub description: String,
}

impl NoteForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Both fields are required before a note can be created or updated.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
        }
    }

    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Description,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "description" | "desc" => Ok(FormField::Description),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::Description => write!(f, "description"),
        }
    }
}

/// Fields sent to the remote update mutation. Nothing else is transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteNoteInput {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_with_camel_case_client_id() {
        let note = Note {
            id: "1".into(),
            client_id: "abc".into(),
            name: "A".into(),
            description: "d1".into(),
            completed: false,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["clientId"], "abc");
        assert!(json.get("client_id").is_none());
    }

    #[test]
    fn note_tolerates_missing_optional_fields() {
        let note: Note = serde_json::from_str(r#"{"id":"1","name":"A"}"#).unwrap();
        assert_eq!(note.description, "");
        assert_eq!(note.client_id, "");
        assert!(!note.completed);
    }

    #[test]
    fn new_notes_get_distinct_ids_and_session_client() {
        let client = ClientId::from("session");
        let a = Note::new(&client, "A".into(), "a".into());
        let b = Note::new(&client, "B".into(), "b".into());
        assert_ne!(a.id, b.id);
        assert_eq!(a.client_id, "session");
        assert!(!a.completed);
    }

    #[test]
    fn form_completeness_requires_both_fields() {
        assert!(!NoteForm::default().is_complete());
        assert!(!NoteForm::new("name", "").is_complete());
        assert!(!NoteForm::new("", "desc").is_complete());
        assert!(NoteForm::new("name", "desc").is_complete());
    }

    #[test]
    fn form_field_parses_aliases() {
        assert_eq!("name".parse::<FormField>().unwrap(), FormField::Name);
        assert_eq!("desc".parse::<FormField>().unwrap(), FormField::Description);
        assert!("title".parse::<FormField>().is_err());
    }
}
