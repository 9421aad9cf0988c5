//! Task record collection and its persistence lifecycle.
//!
//! The collection is owned by a single local actor: the caller mutates it
//! synchronously through [`services::TaskStore`], and every mutation writes
//! the full snapshot through to the key-value store before returning. The
//! gateway only ever sees owned snapshots.
//!
//! - Domain types in [`domain`]
//! - The store service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
