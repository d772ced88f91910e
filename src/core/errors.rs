use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("User with email {0} already exists")]
    EmailAlreadyRegistered(String),
    #[error("Bad email or password")]
    InvalidCredentials,
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Note {0} not found")]
    NoteNotFound(i64),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl NotesError {
    pub fn invalid_input(field: &str, title: &str, description: impl Into<String>) -> Self {
        NotesError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }
}

impl From<sqlx::Error> for NotesError {
    fn from(err: sqlx::Error) -> Self {
        NotesError::DatabaseError(err.to_string())
    }
}
