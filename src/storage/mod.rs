//! Local key-value persistence for task snapshots and integration settings.
//!
//! The task store and the settings resolver never touch the filesystem
//! directly. They depend on the [`ports::KeyValueStore`] contract, which is
//! satisfied by a capability-scoped directory adapter in production and an
//! in-memory adapter in tests.

pub mod adapters;
pub mod ports;

#[cfg(test)]
mod tests;
