//! HTTP cache data structures.

/// Case-insensitive header map.
pub mod http_headers;

/// Outgoing request as seen by the cache.
pub mod http_request;

/// Response snapshot, serializable for storage.
pub mod http_response;

/// Parsed `Cache-Control` directives.
pub mod cache_control;

/// Response as written to the cache, with its expiry.
pub mod stored_response;

/// Wall-clock times around an upstream request.
pub mod response_timing;

/// Cache adaptor wrapping a request executor.
pub mod http_cache;

/// `reqwest`-backed request executor.
pub mod reqwest_executor;
