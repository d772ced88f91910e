use crate::core::errors::NotesError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_create_and_list_notes() {
    let service = create_test_service().await;
    let alice = service.register("alice@x.com", "secret1").await.unwrap();
    let bob = service.register("bob@x.com", "secret1").await.unwrap();

    for i in 0..3 {
        service
            .create_note(&alice, &format!("title {i}"), "content")
            .await
            .unwrap();
    }
    service.create_note(&bob, "bob", "content").await.unwrap();

    let notes = service.list_notes(&alice).await.unwrap();
    assert_eq!(notes.len(), 3);
    assert!(notes.iter().all(|n| n.user_id == alice.id));
    assert_eq!(notes[2].title, "title 2");

    assert_eq!(service.list_notes(&bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_note_requires_title_and_content() {
    let service = create_test_service().await;
    let user = service.register("a@x.com", "secret1").await.unwrap();

    let result = service.create_note(&user, "", "content").await;
    assert!(matches!(result, Err(NotesError::InvalidInput(ref field, _)) if field == "title"));

    let result = service.create_note(&user, "title", "").await;
    assert!(matches!(result, Err(NotesError::InvalidInput(ref field, _)) if field == "content"));

    assert!(service.list_notes(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_note_isolation() {
    let service = create_test_service().await;
    let alice = service.register("alice@x.com", "secret1").await.unwrap();
    let bob = service.register("bob@x.com", "secret1").await.unwrap();
    let note = service.create_note(&bob, "private", "bob only").await.unwrap();

    let read = service.get_note(&alice, note.id).await;
    assert!(matches!(read, Err(NotesError::NoteNotFound(id)) if id == note.id));

    let delete = service.delete_note(&alice, note.id).await;
    assert!(matches!(delete, Err(NotesError::NoteNotFound(_))));

    // Still there for its owner.
    assert_eq!(service.get_note(&bob, note.id).await.unwrap().content, "bob only");
}

#[tokio::test]
async fn test_delete_note() {
    let service = create_test_service().await;
    let user = service.register("a@x.com", "secret1").await.unwrap();
    let note = service.create_note(&user, "title", "content").await.unwrap();

    service.delete_note(&user, note.id).await.unwrap();
    assert!(matches!(
        service.get_note(&user, note.id).await,
        Err(NotesError::NoteNotFound(_))
    ));
    assert!(matches!(
        service.delete_note(&user, note.id).await,
        Err(NotesError::NoteNotFound(_))
    ));
}
