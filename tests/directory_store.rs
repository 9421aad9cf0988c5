//! Integration tests for tasks and settings persisted on disk.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskgate::{
    settings::{
        domain::{Integration, IntegrationDefaults},
        services::{ConfigResolver, SettingsEditor},
    },
    storage::{adapters::DirectoryKeyValueStore, ports::KeyValueStore},
    task::{
        domain::TaskField,
        services::{TASKS_KEY, TaskStore},
    },
};
use tempfile::TempDir;

#[fixture]
fn data_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Opens a fresh handle on the data directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be opened.
fn try_open(dir: &TempDir) -> eyre::Result<Arc<DirectoryKeyValueStore>> {
    Ok(Arc::new(DirectoryKeyValueStore::open(dir.path())?))
}

fn open(dir: &TempDir) -> Arc<DirectoryKeyValueStore> {
    try_open(dir).expect("open data dir")
}

#[rstest]
fn edits_survive_reopening_the_data_directory(data_dir: TempDir) -> eyre::Result<()> {
    let mut store = TaskStore::load(try_open(&data_dir)?, Arc::new(DefaultClock));
    let added = store.add();
    store.update_field(added.id(), TaskField::Text, "Rotate credentials");
    store.update_field(added.id(), TaskField::Env, "production");
    let expected = store.snapshot();
    drop(store);

    let reopened = TaskStore::load(try_open(&data_dir)?, Arc::new(DefaultClock));

    eyre::ensure!(reopened.snapshot() == expected, "snapshot changed on reload");
    let task = reopened
        .get(added.id())
        .ok_or_else(|| eyre::eyre!("task {} was not persisted", added.id()))?;
    eyre::ensure!(
        task.env().as_str() == "production",
        "unexpected env {}",
        task.env()
    );
    Ok(())
}

#[rstest]
fn first_load_writes_the_seed_snapshot(data_dir: TempDir) {
    let storage = open(&data_dir);

    let store = TaskStore::load(Arc::clone(&storage), Arc::new(DefaultClock));

    assert_eq!(store.len(), 1);
    let raw = storage
        .get(TASKS_KEY)
        .expect("read snapshot")
        .expect("seed persisted");
    assert!(raw.starts_with('['));
}

#[rstest]
fn corrupt_snapshot_is_not_overwritten_on_load(data_dir: TempDir) {
    let storage = open(&data_dir);
    storage.set(TASKS_KEY, "{not json").expect("write snapshot");

    let store = TaskStore::load(Arc::clone(&storage), Arc::new(DefaultClock));

    assert_eq!(store.len(), 1);
    assert_eq!(
        storage.get(TASKS_KEY).expect("read snapshot").as_deref(),
        Some("{not json")
    );
}

#[rstest]
fn saved_settings_are_resolved_from_a_fresh_handle(data_dir: TempDir) {
    let editor = SettingsEditor::new(open(&data_dir), IntegrationDefaults::default());
    let mut form = editor.load();
    form.ollama_model = "mistral".to_owned();
    form.ollama_endpoint = "http://gpu-box:11434".to_owned();
    editor.save(&form).expect("save settings");

    let resolver = ConfigResolver::new(open(&data_dir), IntegrationDefaults::default());
    let ai = resolver.resolve(Integration::Ai);

    assert_eq!(ai.endpoint(), "http://gpu-box:11434");
    assert_eq!(ai.model(), Some("mistral"));
    assert!(ai.enabled());
}

#[rstest]
fn timestamp_ids_written_by_earlier_clients_are_kept(data_dir: TempDir) -> eyre::Result<()> {
    let storage = try_open(&data_dir)?;
    storage.set(
        TASKS_KEY,
        r#"[{"id":1712345678901,"text":"Existing work","description":"",
            "label":"Feature","env":"dev","status":"Backlog",
            "createdAt":"2024-04-05T19:34:38.901Z","editedAt":"2024-04-05T19:34:38.901Z"}]"#,
    )?;

    let mut store = TaskStore::load(Arc::clone(&storage), Arc::new(DefaultClock));
    store.add();
    let reopened = TaskStore::load(try_open(&data_dir)?, Arc::new(DefaultClock));

    let texts: Vec<&str> = reopened.tasks().iter().map(|task| task.text()).collect();
    eyre::ensure!(texts == ["Existing work", ""], "unexpected tasks {texts:?}");
    let first = reopened
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("no tasks after reload"))?;
    eyre::ensure!(first.id().to_string() == "1712345678901", "id changed to {}", first.id());
    Ok(())
}
