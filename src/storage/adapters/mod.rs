//! Adapter implementations for key-value persistence.

pub mod directory;
pub mod memory;

pub use directory::DirectoryKeyValueStore;
pub use memory::InMemoryKeyValueStore;
