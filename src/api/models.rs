use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::{FieldError, NotesError};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldError>,
}

// Newtype wrapper for NotesError to implement IntoResponse
pub struct ApiError(pub NotesError);

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(NotesError::invalid_input("body", "Invalid request body", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(NotesError::invalid_input("note_id", "Invalid path parameter", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, field) = match self.0 {
            NotesError::InvalidInput(_, detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                detail.description.clone(),
                Some(detail),
            ),
            NotesError::EmailAlreadyRegistered(_) => (
                StatusCode::BAD_REQUEST,
                "User with this email already exists".to_string(),
                None,
            ),
            NotesError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Bad email or password".to_string(), None),
            NotesError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason, None),
            NotesError::NoteNotFound(_) => (StatusCode::NOT_FOUND, "Note not found".to_string(), None),
            NotesError::DatabaseError(msg) | NotesError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };
        (status, Json(ErrorResponse { error: error_message, field })).into_response()
    }
}
