use dotenv::dotenv;
use std::env;

pub const DEFAULT_JWT_SECRET: &str = "change_this_to_a_strong_secret";

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 2] = ["https://notes-app-umber-mu.vercel.app", "http://localhost:3000"];

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub log_level: String,
    pub jwt_secret: String,
    pub access_token_expires_minutes: i64,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("database_url", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"<redacted>")
            .field("access_token_expires_minutes", &self.access_token_expires_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(8000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://notes.db".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            jwt_secret: env::var("AUTHJWT_SECRET_KEY").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            access_token_expires_minutes: env::var("ACCESS_TOKEN_EXPIRES_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// True when no signing secret was configured and the built-in one is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
