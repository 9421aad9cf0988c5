//! Write-through task collection store.

use std::collections::HashSet;
use std::sync::Arc;

use mockable::Clock;
use serde_json::Value;
use tracing::{debug, warn};

use crate::storage::ports::KeyValueStore;
use crate::task::domain::{TaskField, TaskId, TaskRecord};

/// Storage key holding the serialised task collection.
pub const TASKS_KEY: &str = "daily-tasks";

/// Storage key receiving a copy of a snapshot that did not load cleanly.
pub const TASKS_BACKUP_KEY: &str = "daily-tasks-backup";

/// Owns the ordered task collection and persists it after every mutation.
///
/// Operations never fail observably. Unknown identifiers are ignored and
/// persistence failures are logged, leaving the in-memory collection as the
/// source of truth for the rest of the session.
pub struct TaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    storage: Arc<K>,
    clock: Arc<C>,
    tasks: Vec<TaskRecord>,
    writable: bool,
}

impl<K, C> TaskStore<K, C>
where
    K: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Rehydrates the collection from storage.
    ///
    /// When no snapshot has ever been written the collection is seeded with
    /// one blank record, which is persisted immediately. Records that fail
    /// to decode are skipped individually; a snapshot that is not a JSON
    /// array at all is replaced by the same seed in memory. In both cases
    /// the stored bytes are copied to [`TASKS_BACKUP_KEY`] first, and if that
    /// copy cannot be written the store stops persisting for the session so
    /// the original is never overwritten. A snapshot that cannot be read at
    /// all disables persistence the same way.
    #[must_use]
    pub fn load(storage: Arc<K>, clock: Arc<C>) -> Self {
        let mut store = Self {
            storage,
            clock,
            tasks: Vec::new(),
            writable: true,
        };

        match store.storage.get(TASKS_KEY) {
            Ok(Some(raw)) => {
                let decoded = decode_snapshot(&raw);
                if decoded.skipped > 0 || decoded.malformed {
                    store.back_up(&raw);
                }
                if decoded.malformed {
                    store.seed();
                } else {
                    store.tasks = dedupe(decoded.tasks);
                }
            }
            Ok(None) => {
                debug!(key = TASKS_KEY, "no task snapshot found, seeding");
                store.seed();
                store.persist();
            }
            Err(err) => {
                warn!(key = TASKS_KEY, error = %err, "failed to read task snapshot");
                store.writable = false;
                store.seed();
            }
        }

        store
    }

    /// Appends a blank record and returns a copy of it.
    pub fn add(&mut self) -> TaskRecord {
        let record = TaskRecord::blank(self.fresh_id(), &*self.clock);
        self.append(record)
    }

    /// Appends a record whose title is a promoted suggestion.
    pub fn add_from_suggestion(&mut self, text: impl Into<String>) -> TaskRecord {
        let record = TaskRecord::with_text(self.fresh_id(), text, &*self.clock);
        self.append(record)
    }

    /// Replaces one field of the record with the given identifier.
    ///
    /// Returns `false`, without persisting, when no such record exists.
    pub fn update_field(&mut self, id: &TaskId, field: TaskField, value: impl Into<String>) -> bool {
        let Some(record) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            debug!(task_id = %id, %field, "update ignored for unknown task");
            return false;
        };
        record.set_field(field, value, &*self.clock);
        self.persist();
        true
    }

    /// Removes the record with the given identifier.
    ///
    /// Returns `false`, without persisting, when no such record exists.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == before {
            debug!(task_id = %id, "remove ignored for unknown task");
            return false;
        }
        self.persist();
        true
    }

    /// Returns an owned copy of the ordered collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.tasks.clone()
    }

    /// Borrows the ordered collection.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Finds a record by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn seed(&mut self) {
        let record = TaskRecord::blank(self.fresh_id(), &*self.clock);
        self.tasks = vec![record];
    }

    fn append(&mut self, record: TaskRecord) -> TaskRecord {
        self.tasks.push(record.clone());
        self.persist();
        record
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let candidate = TaskId::new();
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn back_up(&mut self, raw: &str) {
        match self.storage.set(TASKS_BACKUP_KEY, raw) {
            Ok(()) => warn!(
                key = TASKS_KEY,
                backup = TASKS_BACKUP_KEY,
                "task snapshot did not load cleanly, original copied to backup"
            ),
            Err(err) => {
                warn!(
                    key = TASKS_KEY,
                    error = %err,
                    "failed to back up task snapshot, edits will not be persisted"
                );
                self.writable = false;
            }
        }
    }

    fn persist(&self) {
        if !self.writable {
            debug!(key = TASKS_KEY, "persistence disabled for this session");
            return;
        }
        let encoded = match serde_json::to_string(&self.tasks) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key = TASKS_KEY, error = %err, "failed to encode task snapshot");
                return;
            }
        };
        if let Err(err) = self.storage.set(TASKS_KEY, &encoded) {
            warn!(key = TASKS_KEY, error = %err, "failed to persist task snapshot");
        }
    }
}

/// Result of decoding a stored snapshot.
struct DecodedSnapshot {
    tasks: Vec<TaskRecord>,
    skipped: usize,
    malformed: bool,
}

/// Decodes each array element on its own so one bad record does not take
/// the rest of the collection with it.
fn decode_snapshot(raw: &str) -> DecodedSnapshot {
    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(key = TASKS_KEY, error = %err, "task snapshot is not a JSON array");
            return DecodedSnapshot {
                tasks: Vec::new(),
                skipped: 0,
                malformed: true,
            };
        }
    };

    let mut skipped = 0;
    let tasks = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<TaskRecord>(entry) {
            Ok(task) => Some(task),
            Err(err) => {
                warn!(key = TASKS_KEY, index, error = %err, "skipping undecodable task record");
                skipped += 1;
                None
            }
        })
        .collect();

    DecodedSnapshot {
        tasks,
        skipped,
        malformed: false,
    }
}

/// Drops records whose identifier already appeared earlier in the snapshot
/// and repairs timestamp ordering.
fn dedupe(tasks: Vec<TaskRecord>) -> Vec<TaskRecord> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter(|task| {
            let first = seen.insert(task.id().clone());
            if !first {
                warn!(task_id = %task.id(), "dropping duplicate task from snapshot");
            }
            first
        })
        .map(|mut task| {
            task.repair_timestamps();
            task
        })
        .collect()
}
