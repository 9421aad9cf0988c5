//! Port contracts for outbound HTTP.

pub mod transport;

pub use transport::{HttpTransport, TransportError, TransportResponse, TransportResult};

#[cfg(test)]
pub use transport::MockHttpTransport;
