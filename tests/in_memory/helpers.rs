//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;
use taskgate::{
    gateway::{adapters::RecordingTransport, services::IntegrationGateway},
    settings::{domain::IntegrationDefaults, services::ConfigResolver},
    storage::adapters::InMemoryKeyValueStore,
    task::services::TaskStore,
};

/// Gateway wired to scripted HTTP and in-memory settings.
pub type TestGateway = IntegrationGateway<RecordingTransport, InMemoryKeyValueStore, DefaultClock>;

/// Task store over in-memory storage.
pub type TestStore = TaskStore<InMemoryKeyValueStore, DefaultClock>;

/// Provides a fresh in-memory key-value store.
#[fixture]
pub fn storage() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

/// Provides a transport with no scripted responses.
#[fixture]
pub fn transport() -> RecordingTransport {
    RecordingTransport::new()
}

/// Loads a task store over `storage`.
pub fn task_store(storage: &InMemoryKeyValueStore) -> TestStore {
    TaskStore::load(Arc::new(storage.clone()), Arc::new(DefaultClock))
}

/// Builds a gateway reading settings from `storage`.
pub fn gateway(storage: &InMemoryKeyValueStore, transport: &RecordingTransport) -> TestGateway {
    let resolver = ConfigResolver::new(Arc::new(storage.clone()), IntegrationDefaults::default());
    IntegrationGateway::new(
        Arc::new(transport.clone()),
        resolver,
        Arc::new(DefaultClock),
    )
}

/// Encodes an AI completion body.
pub fn completion(text: &str) -> String {
    json!({"model": "llama2", "response": text, "done": true}).to_string()
}
