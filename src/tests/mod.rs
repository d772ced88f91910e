mod config_tests;
mod note_tests;
mod user_tests;

use crate::auth::jwt::JwtService;
use crate::core::services::NotesService;
use crate::infrastructure::storage::sqlite::SqliteStorage;

pub const TEST_SECRET: &str = "test-secret";
// Lowest cost bcrypt accepts; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub async fn create_test_storage() -> SqliteStorage {
    init_tracing();
    let storage = SqliteStorage::connect("sqlite::memory:").await.unwrap();
    storage.migrate().await.unwrap();
    storage
}

pub async fn create_test_service() -> NotesService<SqliteStorage> {
    let storage = create_test_storage().await;
    let jwt_service = JwtService::new(TEST_SECRET, chrono::Duration::minutes(15));
    NotesService::new(storage, jwt_service, TEST_BCRYPT_COST)
}
