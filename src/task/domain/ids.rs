//! Identifier type for task records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ParseTaskIdError;

/// Opaque identifier for a task record.
///
/// New records get a random UUID. Snapshots written by earlier clients may
/// carry integer (millisecond timestamp) or free-form string identifiers;
/// those are kept as-is so the records survive a load and save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Uuid(Uuid),
    Number(i64),
    Text(String),
}

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Repr::Uuid(Uuid::new_v4()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(Repr::Number(value))
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// Parses a UUID, then an integer, and otherwise keeps the trimmed text.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ParseTaskIdError);
        }
        if let Ok(uuid) = Uuid::parse_str(trimmed) {
            return Ok(Self(Repr::Uuid(uuid)));
        }
        Ok(trimmed.parse::<i64>().map_or_else(
            |_| Self(Repr::Text(trimmed.to_owned())),
            |number| Self(Repr::Number(number)),
        ))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Uuid(uuid) => write!(f, "{uuid}"),
            Repr::Number(number) => write!(f, "{number}"),
            Repr::Text(text) => f.write_str(text),
        }
    }
}
