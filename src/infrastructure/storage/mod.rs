use crate::core::errors::NotesError;
use crate::core::models::{note::Note, user::User};
use async_trait::async_trait;

/// Every note query takes the owner's id; there is no unscoped note access.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, NotesError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, NotesError>;
    async fn create_note(&self, title: &str, content: &str, owner_id: i64) -> Result<Note, NotesError>;
    async fn list_notes(&self, owner_id: i64) -> Result<Vec<Note>, NotesError>;
    async fn get_note(&self, note_id: i64, owner_id: i64) -> Result<Option<Note>, NotesError>;
    async fn delete_note(&self, note_id: i64, owner_id: i64) -> Result<bool, NotesError>;
}

pub mod sqlite;
