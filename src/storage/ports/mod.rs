//! Port contracts for local key-value persistence.

pub mod key_value;

pub use key_value::{KeyValueError, KeyValueResult, KeyValueStore};
