use crate::{
    api::{AppState, models::*},
    core::{
        errors::NotesError,
        models::{
            note::NoteOut,
            user::{User, UserOut},
        },
    },
};
use axum::{
    Extension, Json, Router,
    extract::{
        Path, Request, State,
        rejection::{JsonRejection, PathRejection},
    },
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

// Middleware to validate the bearer token and attach the caller's user row
async fn auth_middleware(
    State(service): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| NotesError::Unauthorized("Missing Authorization Header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| NotesError::Unauthorized("Bad Authorization header. Expected 'Bearer <JWT>'".to_string()))?;

    let user = service.current_user(token).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/notes", post(create_note).get(list_notes))
        .route("/notes/", post(create_note).get(list_notes))
        .route("/notes/{note_id}", get(get_note).delete(delete_note))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = UserOut),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register(
    State(service): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<UserOut>, ApiError> {
    let Json(req) = payload?;
    let user = service.register(&req.email, &req.password).await?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    let access_token = service.authenticate(&req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/notes/",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Note created", body = NoteOut),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn create_note(
    State(service): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Json<NoteOut>, ApiError> {
    let Json(req) = payload?;
    let note = service.create_note(&user, &req.title, &req.content).await?;
    Ok(Json(note.into()))
}

#[utoipa::path(
    get,
    path = "/notes/",
    responses(
        (status = 200, description = "Notes of the caller", body = Vec<NoteOut>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_notes(
    State(service): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<NoteOut>>, ApiError> {
    let notes = service.list_notes(&user).await?;
    Ok(Json(notes.into_iter().map(NoteOut::from).collect()))
}

#[utoipa::path(
    get,
    path = "/notes/{note_id}",
    params(
        ("note_id" = i64, Path, description = "ID of the note to retrieve")
    ),
    responses(
        (status = 200, description = "Note retrieved", body = NoteOut),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_note(
    State(service): State<AppState>,
    Extension(user): Extension<User>,
    note_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<NoteOut>, ApiError> {
    let Path(note_id) = note_id?;
    let note = service.get_note(&user, note_id).await?;
    Ok(Json(note.into()))
}

#[utoipa::path(
    delete,
    path = "/notes/{note_id}",
    params(
        ("note_id" = i64, Path, description = "ID of the note to delete")
    ),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found or not owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn delete_note(
    State(service): State<AppState>,
    Extension(user): Extension<User>,
    note_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(note_id) = note_id?;
    service.delete_note(&user, note_id).await?;
    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
    }))
}
