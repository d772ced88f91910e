use crate::auth::jwt::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::core::errors::NotesError;
use crate::core::models::{note::Note, user::User};
use crate::infrastructure::storage::Storage;
use tracing::{debug, info};

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct NotesService<S: Storage> {
    storage: S,
    jwt_service: JwtService,
    bcrypt_cost: u32,
}

impl<S: Storage> NotesService<S> {
    pub fn new(storage: S, jwt_service: JwtService, bcrypt_cost: u32) -> Self {
        NotesService {
            storage,
            jwt_service,
            bcrypt_cost,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, NotesError> {
        let email = validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(NotesError::invalid_input(
                "password",
                "Password too short",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        if self.storage.get_user_by_email(&email).await?.is_some() {
            return Err(NotesError::EmailAlreadyRegistered(email));
        }

        let password_hash = hash_password(password, self.bcrypt_cost)?;
        let user = self.storage.create_user(&email, &password_hash).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Checks the credentials and issues an access token whose subject is the email.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, NotesError> {
        let user = self
            .storage
            .get_user_by_email(&normalize_email(email))
            .await?
            .ok_or(NotesError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            debug!(user_id = user.id, "Password mismatch on login");
            return Err(NotesError::InvalidCredentials);
        }
        self.jwt_service.generate_token(&user.email)
    }

    /// Resolves a bearer token to the user it was issued for.
    pub async fn current_user(&self, token: &str) -> Result<User, NotesError> {
        let claims = self.jwt_service.validate_token(token)?;
        self.storage
            .get_user_by_email(&claims.sub)
            .await?
            .ok_or_else(|| NotesError::Unauthorized("Invalid user".to_string()))
    }

    pub async fn create_note(&self, owner: &User, title: &str, content: &str) -> Result<Note, NotesError> {
        validate_non_empty("title", title)?;
        validate_non_empty("content", content)?;
        let note = self.storage.create_note(title, content, owner.id).await?;
        info!(note_id = note.id, user_id = owner.id, "Note created");
        Ok(note)
    }

    pub async fn list_notes(&self, owner: &User) -> Result<Vec<Note>, NotesError> {
        self.storage.list_notes(owner.id).await
    }

    pub async fn get_note(&self, owner: &User, note_id: i64) -> Result<Note, NotesError> {
        self.storage
            .get_note(note_id, owner.id)
            .await?
            .ok_or(NotesError::NoteNotFound(note_id))
    }

    pub async fn delete_note(&self, owner: &User, note_id: i64) -> Result<(), NotesError> {
        if !self.storage.delete_note(note_id, owner.id).await? {
            return Err(NotesError::NoteNotFound(note_id));
        }
        info!(note_id, user_id = owner.id, "Note deleted");
        Ok(())
    }
}

/// Trims surrounding whitespace and lowercases the domain; the local part
/// keeps its case.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Returns the normalized address that identifies the account.
fn validate_email(email: &str) -> Result<String, NotesError> {
    let invalid = |description: &str| NotesError::invalid_input("email", "Invalid email", description);

    let email = normalize_email(email);
    if email.is_empty() {
        return Err(invalid("Email is required"));
    }
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("The email address must contain an @-sign"))?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid("The email address is not valid"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("The part after the @-sign is not a valid domain"));
    }
    Ok(email)
}

fn validate_non_empty(field: &str, value: &str) -> Result<(), NotesError> {
    if value.is_empty() {
        return Err(NotesError::invalid_input(
            field,
            "Value too short",
            format!("`{}` must have at least 1 character", field),
        ));
    }
    Ok(())
}
