//! Domain model for integration settings.

mod defaults;
mod integration;
mod overrides;

pub use defaults::{AiDefaults, AutomationDefaults, IntegrationDefaults};
pub use integration::{EffectiveConfig, Integration};
pub use overrides::{IntegrationOverrides, OverrideBlob, SETTINGS_KEY};
