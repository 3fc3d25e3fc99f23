//! CRUD tests for the notes store against an in-memory database.

use notes_store::{Store, StoreConfig, StoreError};

async fn store() -> Store {
    Store::connect(StoreConfig::in_memory())
        .await
        .expect("in-memory store should connect")
}

#[tokio::test]
async fn insert_assigns_id_and_list_returns_it() {
    let store = store().await;

    let note = store.insert_note("first").await.unwrap();
    assert!(note.id >= 1);
    assert_eq!(note.content, "first");

    let all = store.list_notes().await.unwrap();
    assert_eq!(all, vec![note]);
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = store().await;

    store.insert_note("a").await.unwrap();
    store.insert_note("b").await.unwrap();
    store.insert_note("c").await.unwrap();

    let contents: Vec<String> = store
        .list_notes()
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.content)
        .collect();
    assert_eq!(contents, ["a", "b", "c"]);
}

#[tokio::test]
async fn duplicate_content_is_rejected_and_row_retained() {
    let store = store().await;

    store.insert_note("same").await.unwrap();
    let err = store.insert_note("same").await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateContent(ref c) if c == "same"));

    // The first row survives the failed insert.
    assert_eq!(store.list_notes().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_note_returns_row_or_not_found() {
    let store = store().await;

    let inserted = store.insert_note("lookup me").await.unwrap();
    let fetched = store.get_note(inserted.id).await.unwrap();
    assert_eq!(fetched, inserted);

    let err = store.get_note(inserted.id + 100).await.unwrap_err();
    assert!(matches!(err, StoreError::NoteNotFound(_)));
}

#[tokio::test]
async fn delete_note_is_idempotent() {
    let store = store().await;

    let note = store.insert_note("short lived").await.unwrap();
    assert_eq!(store.delete_note(note.id).await.unwrap(), 1);

    // Absent id deletes zero rows without error.
    assert_eq!(store.delete_note(note.id).await.unwrap(), 0);
    assert_eq!(store.delete_note(9999).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_all_clears_table_and_is_repeatable() {
    let store = store().await;

    store.insert_note("one").await.unwrap();
    store.insert_note("two").await.unwrap();

    assert_eq!(store.delete_all_notes().await.unwrap(), 2);
    assert!(store.list_notes().await.unwrap().is_empty());

    // Empty table still succeeds.
    assert_eq!(store.delete_all_notes().await.unwrap(), 0);
}

#[tokio::test]
async fn connect_creates_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");
    let config = StoreConfig {
        database_url: format!("sqlite://{}", path.display()),
        max_connections: 2,
        min_connections: 1,
        run_migrations: true,
    };

    let store = Store::connect(config).await.unwrap();
    store.insert_note("persisted").await.unwrap();
    assert!(path.exists());
}
