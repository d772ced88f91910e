use crate::core::errors::NotesError;

pub fn hash_password(password: &str, cost: u32) -> Result<String, NotesError> {
    bcrypt::hash(password, cost).map_err(|e| NotesError::InternalServerError(format!("Password hashing error: {}", e)))
}

/// Malformed stored hashes count as a mismatch.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    match bcrypt::verify(plain, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be verified");
            false
        }
    }
}
