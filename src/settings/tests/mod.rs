//! Unit tests for settings resolution and editing.
