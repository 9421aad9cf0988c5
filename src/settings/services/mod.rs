//! Services resolving and editing integration settings.

mod editor;
mod resolver;

pub use editor::{SettingsEditor, SettingsError};
pub use resolver::ConfigResolver;
