//! Cache driver contract and optional capabilities.

/// Base contract every storage driver implements.
pub mod cache_backend;

/// Tag-indexed set/delete/find.
pub mod cache_tagging;

/// Sweep of expired entries for drivers without native expiry.
pub mod cache_garbage_collect;

/// Atomic-ish counters.
pub mod cache_arithmetic;
