//! HTTP cache trait definitions.

/// Performs the real upstream request on a cache miss.
pub mod request_executor;
