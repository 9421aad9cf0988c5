//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing a task field name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task field: {0}")]
pub struct ParseTaskFieldError(pub String);

/// Error returned when a task identifier is blank.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task identifier must not be empty")]
pub struct ParseTaskIdError;
