//! GraphQL transport for the note service.
//!
//! Every operation is a single POST of `{"query", "variables"}` to the endpoint. The
//! backend answers `{"data": {...}, "errors": [...]}`; any error entry, a non-success
//! status, or a missing payload field is reported as [`NotesError::Remote`].

use super::RemoteDataService;
use crate::error::{NotesError, Result};
use crate::model::{DeleteNoteInput, Note, UpdateNoteInput};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const API_KEY_HEADER: &str = "x-api-key";

const LIST_NOTES: &str = r#"query ListNotes {
  listNotes {
    items { id clientId name description completed }
  }
}"#;

const CREATE_NOTE: &str = r#"mutation CreateNote($input: CreateNoteInput!) {
  createNote(input: $input) { id clientId name description completed }
}"#;

const UPDATE_NOTE: &str = r#"mutation UpdateNote($input: UpdateNoteInput!) {
  updateNote(input: $input) { id clientId name description completed }
}"#;

const DELETE_NOTE: &str = r#"mutation DeleteNote($input: DeleteNoteInput!) {
  deleteNote(input: $input) { id clientId name description completed }
}"#;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct NoteConnection {
    // the backend may return null entries for records it failed to resolve
    items: Vec<Option<Note>>,
}

#[derive(Debug, Clone)]
pub struct GraphQlService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GraphQlService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T> {
        tracing::debug!(endpoint = %self.endpoint, field, "graphql request");

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(NotesError::Remote(format!(
                "{} returned {}: {}",
                field, status, body
            )));
        }

        let body: GraphQlResponse = response.json().await?;
        if !body.errors.is_empty() {
            let messages: Vec<_> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(NotesError::Remote(format!(
                "{}: {}",
                field,
                messages.join("; ")
            )));
        }

        let payload = body
            .data
            .and_then(|mut data| data.get_mut(field).map(Value::take))
            .filter(|value| !value.is_null())
            .ok_or_else(|| NotesError::Remote(format!("{}: response has no data", field)))?;

        serde_json::from_value(payload)
            .map_err(|e| NotesError::Remote(format!("{}: unexpected payload: {}", field, e)))
    }
}

impl RemoteDataService for GraphQlService {
    async fn list(&self) -> Result<Vec<Note>> {
        let connection: NoteConnection = self.execute(LIST_NOTES, json!({}), "listNotes").await?;
        Ok(connection.items.into_iter().flatten().collect())
    }

    async fn create(&self, input: Note) -> Result<Note> {
        self.execute(CREATE_NOTE, json!({ "input": input }), "createNote")
            .await
    }

    async fn update(&self, input: UpdateNoteInput) -> Result<Note> {
        self.execute(UPDATE_NOTE, json!({ "input": input }), "updateNote")
            .await
    }

    async fn delete(&self, input: DeleteNoteInput) -> Result<Note> {
        self.execute(DELETE_NOTE, json!({ "input": input }), "deleteNote")
            .await
    }
}
