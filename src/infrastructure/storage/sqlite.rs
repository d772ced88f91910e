use crate::core::errors::NotesError;
use crate::core::models::{note::Note, user::User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at DATETIME NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        user_id INTEGER NOT NULL REFERENCES users (id),
        created_at DATETIME NOT NULL,
        updated_at DATETIME NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_notes_user_id ON notes (user_id)",
];

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStorage { pool }
    }

    /// Opens (and creates, if missing) the database at `database_url`.
    ///
    /// An in-memory database only lives as long as its connection, so for
    /// `:memory:` URLs the pool holds exactly one connection that is never
    /// recycled.
    pub async fn connect(database_url: &str) -> Result<Self, NotesError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        Ok(SqliteStorage::new(pool))
    }

    /// Creates the tables if they are absent. Safe to run on every start.
    pub async fn migrate(&self) -> Result<(), NotesError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::info!("Database schema ensured");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, NotesError> {
        let created_at = Utc::now();
        let result = sqlx::query("INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?)")
            .bind(email)
            .bind(password_hash)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    NotesError::EmailAlreadyRegistered(email.to_string())
                }
                other => NotesError::from(other),
            })?;

        Ok(User {
            id: result.last_insert_rowid(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        })
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, NotesError> {
        let user = sqlx::query_as::<_, User>("SELECT id, email, password_hash, created_at FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn create_note(&self, title: &str, content: &str, owner_id: i64) -> Result<Note, NotesError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO notes (title, content, user_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(owner_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Note {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            content: content.to_string(),
            user_id: owner_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list_notes(&self, owner_id: i64) -> Result<Vec<Note>, NotesError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM notes
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn get_note(&self, note_id: i64, owner_id: i64) -> Result<Option<Note>, NotesError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM notes
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(note_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn delete_note(&self, note_id: i64, owner_id: i64) -> Result<bool, NotesError> {
        let deleted = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
            .bind(note_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(deleted > 0)
    }
}
