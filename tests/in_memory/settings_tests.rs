//! Settings saved through the editor take effect on the next gateway call.

use std::sync::Arc;

use rstest::rstest;
use taskgate::{
    gateway::{
        adapters::{RecordedMethod, RecordingTransport},
        domain::DispatchOutcome,
    },
    settings::{domain::IntegrationDefaults, services::SettingsEditor},
    storage::adapters::InMemoryKeyValueStore,
};

use super::helpers::{gateway, storage, task_store, transport};

fn editor(storage: &InMemoryKeyValueStore) -> SettingsEditor<InMemoryKeyValueStore> {
    SettingsEditor::new(Arc::new(storage.clone()), IntegrationDefaults::default())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn saved_webhook_is_used_without_rebuilding_the_gateway(
    storage: InMemoryKeyValueStore,
    transport: RecordingTransport,
) {
    let store = task_store(&storage);
    let gateway = gateway(&storage, &transport);
    let editor = editor(&storage);
    let mut form = editor.load();
    form.n8n_webhook = "https://hooks.example.test/tasks".to_owned();
    editor.save(&form).expect("save settings");
    transport.respond_with(200, "{}").expect("queue response");

    let outcome = gateway.submit(&store.snapshot()).await;

    assert!(outcome.is_success());
    let requests = transport.requests().expect("requests");
    assert_eq!(requests.len(), 1);
    let request = requests.first().expect("request");
    assert_eq!(request.method, RecordedMethod::Post);
    assert_eq!(request.url, "https://hooks.example.test/tasks");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabling_automation_declines_dispatch(
    storage: InMemoryKeyValueStore,
    transport: RecordingTransport,
) {
    let store = task_store(&storage);
    let editor = editor(&storage);
    let mut form = editor.load();
    form.n8n_enabled = false;
    editor.save(&form).expect("save settings");
    let gateway = gateway(&storage, &transport);

    let outcome = gateway.submit(&store.snapshot()).await;

    assert_eq!(
        outcome,
        DispatchOutcome::Declined {
            message: "n8n integration is disabled".to_owned()
        }
    );
    assert!(transport.requests().expect("requests").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn probes_ignore_the_enabled_flags(
    storage: InMemoryKeyValueStore,
    transport: RecordingTransport,
) {
    let editor = editor(&storage);
    let mut form = editor.load();
    form.n8n_enabled = false;
    form.ollama_enabled = false;
    editor.save(&form).expect("save settings");
    transport.respond_with(200, "{}").expect("queue response");
    transport
        .respond_with(200, r#"{"models":[]}"#)
        .expect("queue response");
    let gateway = gateway(&storage, &transport);

    assert!(gateway.test_automation().await);
    assert!(gateway.test_ai().await);
    let methods: Vec<_> = transport
        .requests()
        .expect("requests")
        .into_iter()
        .map(|request| request.method)
        .collect();
    assert_eq!(methods, vec![RecordedMethod::Post, RecordedMethod::Get]);
}
