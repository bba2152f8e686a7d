use super::*;

const KEY: &str = "gcaUser";

fn record(id: i64, role: &str) -> PersistedRecord {
    PersistedRecord {
        id,
        username: format!("user{id}"),
        name: format!("User {id}"),
        role: role.to_owned(),
    }
}

fn memory_store() -> (Arc<MemoryBackend>, SessionStore) {
    let backend = Arc::new(MemoryBackend::new());
    let store = SessionStore::new(backend.clone(), KEY);
    (backend, store)
}

// =============================================================
// MemoryBackend
// =============================================================

#[tokio::test]
async fn memory_backend_round_trips_and_removes() {
    let backend = MemoryBackend::new();
    assert_eq!(backend.get_item("k").await, Ok(None));
    backend.set_item("k", "v").await.unwrap();
    assert_eq!(backend.get_item("k").await, Ok(Some("v".to_owned())));
    backend.remove_item("k").await.unwrap();
    backend.remove_item("k").await.unwrap();
    assert_eq!(backend.get_item("k").await, Ok(None));
}

#[tokio::test]
async fn local_storage_is_unavailable_outside_browser() {
    let backend = LocalStorageBackend;
    assert!(matches!(backend.get_item(KEY).await, Err(AuthError::PersistenceUnavailable(_))));
    assert!(matches!(backend.set_item(KEY, "{}").await, Err(AuthError::PersistenceUnavailable(_))));
}

// =============================================================
// SessionStore
// =============================================================

#[tokio::test]
async fn save_then_load_returns_record() {
    let (_, store) = memory_store();
    store.save(&record(1, "admin")).await.unwrap();
    assert_eq!(store.load().await, Some(record(1, "admin")));
}

#[tokio::test]
async fn save_overwrites_previous_record() {
    let (_, store) = memory_store();
    store.save(&record(1, "admin")).await.unwrap();
    store.save(&record(2, "student")).await.unwrap();
    assert_eq!(store.load().await, Some(record(2, "student")));
}

#[tokio::test]
async fn save_writes_under_fixed_key() {
    let (backend, store) = memory_store();
    store.save(&record(1, "admin")).await.unwrap();
    assert_eq!(store.key(), KEY);
    let raw = backend.get_item(KEY).await.unwrap().unwrap();
    assert_eq!(raw, r#"{"id":1,"username":"user1","name":"User 1","role":"admin"}"#);
}

#[tokio::test]
async fn load_missing_is_none() {
    let (_, store) = memory_store();
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn load_malformed_is_none() {
    for raw in ["", "{", "42", r#"{"id":1}"#] {
        let store = SessionStore::new(Arc::new(MemoryBackend::with_item(KEY, raw)), KEY);
        assert_eq!(store.load().await, None, "{raw:?}");
    }
}

#[tokio::test]
async fn load_keeps_unknown_role_for_caller_to_validate() {
    let raw = r#"{"id":5,"username":"x","name":"X","role":"coach"}"#;
    let store = SessionStore::new(Arc::new(MemoryBackend::with_item(KEY, raw)), KEY);
    assert_eq!(store.load().await.map(|r| r.role), Some("coach".to_owned()));
}

#[tokio::test]
async fn load_from_unavailable_backend_is_none() {
    let store = SessionStore::local(&AuthConfig::default());
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn save_to_unavailable_backend_reports_error() {
    let store = SessionStore::local(&AuthConfig::default());
    let err = store.save(&record(1, "admin")).await.unwrap_err();
    assert!(matches!(err, AuthError::PersistenceUnavailable(_)));
}

#[tokio::test]
async fn clear_is_idempotent() {
    let (_, store) = memory_store();
    store.save(&record(1, "admin")).await.unwrap();
    store.clear().await;
    store.clear().await;
    assert_eq!(store.load().await, None);
}

#[tokio::test]
async fn clear_on_unavailable_backend_is_silent() {
    SessionStore::local(&AuthConfig::default()).clear().await;
}
