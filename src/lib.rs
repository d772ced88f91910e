pub mod api;
pub mod auth;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::NotesError;
pub use crate::core::services::NotesService;
pub use infrastructure::storage::sqlite::SqliteStorage;

#[cfg(test)]
mod tests;
