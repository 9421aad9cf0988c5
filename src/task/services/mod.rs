//! Application services for the task collection.

mod store;

pub use store::{TASKS_BACKUP_KEY, TASKS_KEY, TaskStore};
