//! Port contracts for settings resolution.

pub mod source;

pub use source::ConfigSource;
