//! Integration settings resolution.
//!
//! Each external integration (the automation webhook and the AI inference
//! service) is configured from two layers: the user's persisted override
//! blob and the static built-in defaults. This module merges them into one
//! [`domain::EffectiveConfig`] per integration. The module follows the same
//! hexagonal split as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Resolution and editing services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
