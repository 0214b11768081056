//! HTTP cache enumerations.

/// Request method, with the destructive subset that bypasses the cache.
pub mod http_method;

/// Value of the `x-cache-status` response header.
pub mod cache_status;
