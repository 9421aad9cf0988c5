//! Taskgate: task records with automation and AI integrations.
//!
//! This crate owns a locally persisted list of task records and drives two
//! independent external integrations: a fire-and-forget automation webhook
//! that receives the whole task list, and a local AI inference service used
//! to suggest follow-up tasks and summarise the list.
//!
//! # Architecture
//!
//! Taskgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and HTTP
//! - **Adapters**: Concrete implementations of ports (filesystem, `reqwest`,
//!   in-memory)
//!
//! # Modules
//!
//! - [`storage`]: Key-value persistence port and adapters
//! - [`settings`]: Layered integration configuration
//! - [`task`]: Task record collection and persistence lifecycle
//! - [`gateway`]: Automation dispatch, AI suggestions and summaries
//! - [`config`]: Process-level configuration loading

pub mod config;
pub mod gateway;
pub mod settings;
pub mod storage;
pub mod task;

#[cfg(test)]
mod test_support;
