use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    // No edit operation exists, so this always equals `created_at`.
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct NoteOut {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteOut {
    fn from(note: Note) -> Self {
        NoteOut {
            id: note.id,
            title: note.title,
            content: note.content,
            user_id: note.user_id,
            created_at: note.created_at,
        }
    }
}
