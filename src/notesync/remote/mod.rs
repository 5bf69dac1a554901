//! # Remote Data Service
//!
//! The authoritative note collection lives behind [`RemoteDataService`]. The client
//! never assumes anything about how it is reached: the controller only needs the four
//! operations below, each returning the full note record the backend settled on.
//!
//! ## Implementations
//!
//! - [`graphql::GraphQlService`]: talks to a GraphQL endpoint over HTTP
//!   (`listNotes`, `createNote`, `updateNote`, `deleteNote`).
//! - [`memory::InMemoryService`]: process-local collection for development and tests,
//!   with failure injection so error paths can be driven deterministically.
//!
//! The returned futures are `Send` so a service can be driven from any tokio runtime.

use crate::error::Result;
use crate::model::{DeleteNoteInput, Note, UpdateNoteInput};
use std::future::Future;

pub mod graphql;
pub mod memory;

pub trait RemoteDataService {
    /// Fetch every note in the collection.
    fn list(&self) -> impl Future<Output = Result<Vec<Note>>> + Send;

    /// Store a note created on the client. The id is chosen by the caller.
    fn create(&self, input: Note) -> impl Future<Output = Result<Note>> + Send;

    fn update(&self, input: UpdateNoteInput) -> impl Future<Output = Result<Note>> + Send;

    fn delete(&self, input: DeleteNoteInput) -> impl Future<Output = Result<Note>> + Send;
}
