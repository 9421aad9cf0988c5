//! Unit tests for key-value storage adapters.
