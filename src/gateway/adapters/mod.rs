//! Transport adapters.

pub mod http;
pub mod recording;

pub use http::ReqwestTransport;
pub use recording::{RecordedMethod, RecordedRequest, RecordingTransport};
