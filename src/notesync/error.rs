use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("{0}")]
    Validation(String),

    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotesError {
    pub fn is_remote(&self) -> bool {
        matches!(self, NotesError::Remote(_))
    }
}

impl From<reqwest::Error> for NotesError {
    fn from(err: reqwest::Error) -> Self {
        NotesError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
