//! End-to-end flows across the task store and the integration gateway.

use rstest::rstest;
use serde_json::Value;
use taskgate::{
    gateway::{adapters::RecordingTransport, domain::DispatchOutcome},
    storage::{adapters::InMemoryKeyValueStore, ports::KeyValueStore},
    task::{domain::TaskField, services::TASKS_KEY},
};

use super::helpers::{completion, gateway, storage, task_store, transport};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adopted_suggestions_are_persisted_as_backlog_tasks(
    storage: InMemoryKeyValueStore,
    transport: RecordingTransport,
) {
    let mut store = task_store(&storage);
    let seeded = store.len();
    transport
        .respond_with(200, completion("1. Write release notes\n2. Tag the build"))
        .expect("queue response");
    let gateway = gateway(&storage, &transport);

    let suggestions = gateway.suggest(&store.snapshot()).await;
    for suggestion in &suggestions {
        store.add_from_suggestion(suggestion.clone());
    }

    assert_eq!(suggestions, vec!["Write release notes", "Tag the build"]);
    let reloaded = task_store(&storage);
    assert_eq!(reloaded.len(), seeded + 2);
    let last = reloaded.tasks().last().expect("adopted task");
    assert_eq!(last.text(), "Tag the build");
    assert_eq!(last.status().as_str(), "Backlog");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submit_sends_the_snapshot_taken_before_later_edits(
    storage: InMemoryKeyValueStore,
    transport: RecordingTransport,
) {
    let mut store = task_store(&storage);
    let added = store.add();
    store.update_field(added.id(), TaskField::Text, "Ship it");
    transport
        .respond_with(200, r#"{"received":true}"#)
        .expect("queue response");
    let gateway = gateway(&storage, &transport);

    let snapshot = store.snapshot();
    let pending = gateway.submit(&snapshot);
    store.remove(added.id());
    let outcome = pending.await;

    assert!(matches!(outcome, DispatchOutcome::Delivered { .. }));
    let requests = transport.requests().expect("requests");
    let body = requests
        .first()
        .and_then(|request| request.body.as_ref())
        .expect("dispatch body");
    let sent = body
        .get("tasks")
        .and_then(Value::as_array)
        .expect("tasks array");
    assert_eq!(sent.len(), snapshot.len());
    assert!(
        sent.iter()
            .any(|task| task.get("text") == Some(&Value::from("Ship it")))
    );
    assert!(store.get(added.id()).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_failure_leaves_tasks_untouched(
    storage: InMemoryKeyValueStore,
    transport: RecordingTransport,
) {
    let store = task_store(&storage);
    let before = storage.get(TASKS_KEY).expect("read snapshot");
    transport
        .respond_with(503, "overloaded")
        .expect("queue response");
    let gateway = gateway(&storage, &transport);

    let result = gateway.summarize(&store.snapshot()).await;

    assert!(result.is_err());
    assert_eq!(storage.get(TASKS_KEY).expect("read snapshot"), before);
}
