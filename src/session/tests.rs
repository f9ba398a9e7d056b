use super::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn set_token_persists_to_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.json");
    let session = Session::new(Box::new(FileTokenStore::new(&path)));
    assert!(session.token().is_none());

    session.set_token("abc123");
    assert_eq!(session.token().as_deref(), Some("abc123"));
    assert_eq!(FileTokenStore::new(&path).load().unwrap().as_deref(), Some("abc123"));

    // A fresh session over the same path picks the token up again.
    let reopened = Session::new(Box::new(FileTokenStore::new(&path)));
    assert_eq!(reopened.token().as_deref(), Some("abc123"));
}

#[test]
fn set_token_replaces_the_previous_value() {
    let store = Arc::new(MemoryTokenStore::new());
    let session = Session::new(Box::new(Arc::clone(&store)));
    session.set_token("first");
    session.set_token("second");
    assert_eq!(session.token().as_deref(), Some("second"));
    assert_eq!(store.load().unwrap().as_deref(), Some("second"));
}

#[test]
fn invalidate_clears_the_store_and_notifies() {
    let store = Arc::new(MemoryTokenStore::new());
    store.save("stale").unwrap();
    let notified = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&notified);
    let session = Session::new(Box::new(Arc::clone(&store)))
        .with_unauthorized_handler(move || flag.store(true, Ordering::SeqCst));

    assert_eq!(session.token().as_deref(), Some("stale"));
    session.invalidate();
    assert!(session.token().is_none());
    assert_eq!(store.load().unwrap(), None);
    assert!(notified.load(Ordering::SeqCst));
}

#[test]
fn file_store_clear_without_a_document_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("missing.json"));
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn malformed_store_document_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.json");
    std::fs::write(&path, "not json at all").unwrap();
    let session = Session::new(Box::new(FileTokenStore::new(&path)));
    assert!(session.token().is_none());
}
