//! Cache enumerations.

/// Storage driver selector (file, memcached, redis, sqlite, memory).
pub mod cache_driver;

/// Explicit hit/miss result of a cache lookup.
pub mod cache_lookup;

/// Which paths a recursive delete touches.
pub mod delete_scope;

/// Whether a delete removes every entry or only expired ones.
pub mod expiry_filter;

/// How a multi-file delete reacts to an individual failure.
pub mod error_policy;
