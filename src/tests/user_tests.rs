use crate::core::errors::NotesError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_register_user() {
    let service = create_test_service().await;
    let user = service.register("a@x.com", "secret1").await.unwrap();
    assert_eq!(user.email, "a@x.com");
    assert_ne!(user.password_hash, "secret1");

    let result = service.register("a@x.com", "another1").await;
    assert!(matches!(result, Err(NotesError::EmailAlreadyRegistered(_))));
}

#[tokio::test]
async fn test_register_validates_input() {
    let service = create_test_service().await;

    for email in ["", "no-at-sign", "@x.com", "a@nodot", "a@b@x.com", "a b@x.com"] {
        let result = service.register(email, "secret1").await;
        assert!(
            matches!(result, Err(NotesError::InvalidInput(ref field, _)) if field == "email"),
            "{email:?} should be rejected"
        );
    }

    let result = service.register("a@x.com", "12345").await;
    assert!(matches!(result, Err(NotesError::InvalidInput(ref field, _)) if field == "password"));

    // Nothing was stored by the failed attempts.
    assert!(service.register("a@x.com", "123456").await.is_ok());
}

#[tokio::test]
async fn test_authenticate() {
    let service = create_test_service().await;
    service.register("a@x.com", "secret1").await.unwrap();

    let token = service.authenticate("a@x.com", "secret1").await.unwrap();
    let user = service.current_user(&token).await.unwrap();
    assert_eq!(user.email, "a@x.com");

    let wrong_password = service.authenticate("a@x.com", "secret2").await;
    assert!(matches!(wrong_password, Err(NotesError::InvalidCredentials)));

    let unknown_user = service.authenticate("b@x.com", "secret1").await;
    assert!(matches!(unknown_user, Err(NotesError::InvalidCredentials)));
}

#[tokio::test]
async fn test_current_user_rejects_unknown_subject() {
    let service = create_test_service().await;
    service.register("a@x.com", "secret1").await.unwrap();
    let token = service.authenticate("a@x.com", "secret1").await.unwrap();

    sqlx::query("DELETE FROM users WHERE email = ?")
        .bind("a@x.com")
        .execute(service.storage().pool())
        .await
        .unwrap();

    let result = service.current_user(&token).await;
    assert!(matches!(result, Err(NotesError::Unauthorized(_))));
}

#[tokio::test]
async fn test_email_domain_case_identifies_same_account() {
    let service = create_test_service().await;
    let user = service.register("a@x.com", "secret1").await.unwrap();

    let second = service.register("a@X.COM", "secret1").await;
    assert!(matches!(second, Err(NotesError::EmailAlreadyRegistered(ref email)) if email == "a@x.com"));

    let token = service.authenticate("  a@X.com ", "secret1").await.unwrap();
    assert_eq!(service.current_user(&token).await.unwrap().id, user.id);
}

#[tokio::test]
async fn test_register_stores_normalized_email() {
    let service = create_test_service().await;
    let user = service.register(" Alice@Example.COM ", "secret1").await.unwrap();
    assert_eq!(user.email, "Alice@example.com");

    // The local part keeps its case.
    let result = service.authenticate("alice@example.com", "secret1").await;
    assert!(matches!(result, Err(NotesError::InvalidCredentials)));
}
