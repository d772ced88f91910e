use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{CreateNoteRequest, ErrorResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest},
    core::{
        errors::FieldError,
        models::{note::NoteOut, user::UserOut},
    },
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "Bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::create_note,
        super::handlers::list_notes,
        super::handlers::get_note,
        super::handlers::delete_note
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        CreateNoteRequest,
        MessageResponse,
        ErrorResponse,
        FieldError,
        UserOut,
        NoteOut
    )),
    modifiers(&BearerSecurity),
    info(
        title = "Notes API",
        description = "Personal notes with email/password accounts and bearer tokens",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
