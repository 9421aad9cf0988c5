//! Unit tests for the integration gateway.

mod inference_tests;
