//! Integration tests against a real PostgreSQL database.
//!
//! Requires `DATABASE_URL` and the `integration-tests` feature:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p notes-store --features integration-tests
//! ```

#![cfg(feature = "integration-tests")]

use notes_store::{NewNote, NewUser, Store, StoreError};

async fn connect() -> Store {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let store = Store::connect(&url).await.expect("failed to connect");
    store.apply_schema().await.expect("failed to apply schema");
    store
}

#[tokio::test]
async fn note_crud_roundtrip() {
    let store = connect().await;

    let created = store
        .insert_note(&NewNote::new(Some("HTML is easy".to_string()), Some(true)))
        .await
        .unwrap();
    assert_eq!(created.content, "HTML is easy");
    assert!(created.important);

    let fetched = store.get_note(&created.id.to_string()).await.unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update_note(
            &created.id.to_string(),
            &NewNote::new(Some("HTML is hard".to_string()), Some(false)),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "HTML is hard");
    assert!(!updated.important);

    store.delete_note(&created.id.to_string()).await.unwrap();
    let err = store.get_note(&created.id.to_string()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));

    // Deleting again is still success
    store.delete_note(&created.id.to_string()).await.unwrap();
}

#[tokio::test]
async fn duplicate_username_is_a_validation_error() {
    let store = connect().await;

    let username = format!("user-{}", uuid::Uuid::new_v4());
    let user = NewUser::new(Some(username.clone()), None, "$argon2id$x".to_string());

    store.insert_user(&user).await.unwrap();
    let err = store.insert_user(&user).await.unwrap_err();

    match err {
        StoreError::Validation(msg) => {
            assert!(msg.contains("expected `username` to be unique"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
