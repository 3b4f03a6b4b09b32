use std::sync::Arc;

use mentor_core::model::{Assessment, LearningSession, ResultsPayload, UserProfile};
use mentor_core::time::fixed_now;
use storage::repository::KeyValueStore;
use storage::sqlite::SqliteKeyValueStore;
use storage::{ProfileStore, SessionStore};

fn build_session(topic: &str) -> LearningSession {
    let results = ResultsPayload {
        topic: topic.to_string(),
        assessment: Assessment::default(),
        explanation: "## intro".to_string(),
        resources: Vec::new(),
        quiz: Vec::new(),
    };
    LearningSession::new(topic, Assessment::default(), results, fixed_now())
}

#[tokio::test]
async fn sqlite_round_trips_raw_entries() {
    let store = SqliteKeyValueStore::connect("sqlite:file:memdb_kv?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    assert_eq!(store.read("missing").await.unwrap(), None);
    store.write("k", "v1").await.unwrap();
    store.write("k", "v2").await.unwrap();
    assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v2"));
    store.remove("k").await.unwrap();
    assert_eq!(store.read("k").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_backs_profile_and_session_stores() {
    let store = SqliteKeyValueStore::connect("sqlite:file:memdb_stores?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");
    let kv: Arc<dyn KeyValueStore> = Arc::new(store);

    let profiles = ProfileStore::new(Arc::clone(&kv));
    let profile = UserProfile::new("Ada", Some("36".into()), vec!["Art".into()]).unwrap();
    profiles.save(&profile).await.unwrap();
    assert_eq!(profiles.load().await.unwrap(), profile);

    let sessions = SessionStore::new(kv);
    let session = build_session("quantum computing");
    let id = session.id;
    sessions.add(session).await.unwrap();
    assert_eq!(sessions.load().await.unwrap().len(), 1);

    let (remaining, removed) = sessions.delete(id).await.unwrap();
    assert!(removed);
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let store = SqliteKeyValueStore::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("first run");
    store.migrate().await.expect("second run");
}
