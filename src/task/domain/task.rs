//! Task record and its field-level mutation.

use super::{ParseTaskFieldError, TaskEnv, TaskId, TaskLabel, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mutable fields of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// Short title.
    Text,
    /// Long-form markup description.
    Description,
    /// Classification label.
    Label,
    /// Target environment.
    Env,
    /// Workflow status.
    Status,
}

impl TaskField {
    /// Returns the field name as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Description => "description",
            Self::Label => "label",
            Self::Env => "env",
            Self::Status => "status",
        }
    }
}

impl TryFrom<&str> for TaskField {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "text" => Ok(Self::Text),
            "description" => Ok(Self::Description),
            "label" => Ok(Self::Label),
            "env" => Ok(Self::Env),
            "status" => Ok(Self::Status),
            _ => Err(ParseTaskFieldError(value.to_owned())),
        }
    }
}

impl FromStr for TaskField {
    type Err = ParseTaskFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    id: TaskId,
    text: String,
    description: String,
    label: TaskLabel,
    env: TaskEnv,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    edited_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a blank record with default classification.
    #[must_use]
    pub fn blank(id: TaskId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            text: String::new(),
            description: String::new(),
            label: TaskLabel::default(),
            env: TaskEnv::default(),
            status: TaskStatus::default(),
            created_at: timestamp,
            edited_at: timestamp,
        }
    }

    /// Creates a blank record with the title pre-filled.
    #[must_use]
    pub fn with_text(id: TaskId, text: impl Into<String>, clock: &impl Clock) -> Self {
        let mut record = Self::blank(id, clock);
        record.text = text.into();
        record
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the label.
    #[must_use]
    pub const fn label(&self) -> &TaskLabel {
        &self.label
    }

    /// Returns the environment.
    #[must_use]
    pub const fn env(&self) -> &TaskEnv {
        &self.env
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last edit timestamp.
    #[must_use]
    pub const fn edited_at(&self) -> DateTime<Utc> {
        self.edited_at
    }

    /// Replaces one field and refreshes the edit timestamp.
    ///
    /// Classification fields accept any string; values outside the known
    /// set are stored as-is.
    pub fn set_field(&mut self, field: TaskField, value: impl Into<String>, clock: &impl Clock) {
        let raw = value.into();
        match field {
            TaskField::Text => self.text = raw,
            TaskField::Description => self.description = raw,
            TaskField::Label => self.label = TaskLabel::from(raw),
            TaskField::Env => self.env = TaskEnv::from(raw),
            TaskField::Status => self.status = TaskStatus::from(raw),
        }
        self.touch(clock);
    }

    /// Restores the timestamp ordering of a record read from storage.
    pub(crate) fn repair_timestamps(&mut self) {
        self.edited_at = self.edited_at.max(self.created_at);
    }

    /// Moves `edited_at` to the current clock time, never backwards.
    fn touch(&mut self, clock: &impl Clock) {
        self.edited_at = clock.utc().max(self.edited_at);
    }
}
