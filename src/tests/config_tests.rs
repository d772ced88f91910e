use crate::config::{Config, DEFAULT_JWT_SECRET};

fn config_with_secret(secret: &str) -> Config {
    Config {
        port: 8000,
        database_url: "sqlite://notes.db".to_string(),
        log_level: "info".to_string(),
        jwt_secret: secret.to_string(),
        access_token_expires_minutes: 15,
        bcrypt_cost: bcrypt::DEFAULT_COST,
    }
}

#[test]
fn test_default_secret_is_detected() {
    assert!(config_with_secret(DEFAULT_JWT_SECRET).uses_default_secret());
    assert!(!config_with_secret("a-real-deployment-secret").uses_default_secret());
}

#[test]
fn test_debug_output_redacts_secrets() {
    let output = format!("{:?}", config_with_secret("a-real-deployment-secret"));
    assert!(!output.contains("a-real-deployment-secret"));
    assert!(!output.contains("notes.db"));
    assert!(output.contains("<redacted>"));
    assert!(output.contains("8000"));
}
