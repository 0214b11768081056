//! Cache data structures.

/// Per-group cache facade.
pub mod cache;

/// Explicit registry of cache groups.
pub mod cache_registry;

/// Pending or batched write.
pub mod cache_item;

/// Options for recursive file deletion.
pub mod delete_policy;

/// File-system cache connector.
pub mod cache_connector_file;

/// Memcache-specific cache connector implementation.
pub mod cache_connector_memcache;

/// Redis-specific cache connector implementation.
pub mod cache_connector_redis;

/// SQLite-backed cache connector.
pub mod cache_connector_sqlite;

/// In-process cache connector.
pub mod cache_connector_memory;

/// Stored value of the in-process connector.
pub mod memory_entry;
