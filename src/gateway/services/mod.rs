//! Gateway service driving both integrations.

mod automation;
mod gateway;
mod inference;

pub use gateway::IntegrationGateway;
