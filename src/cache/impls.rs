//! Implementation blocks for the cache facade, registry and connectors.

pub mod cache;
pub mod cache_registry;
pub mod cache_item;
pub mod cache_driver;
pub mod cache_lookup;
pub mod delete_policy;
pub mod cache_connector_file;
pub mod cache_connector_memcache;
pub mod cache_connector_redis;
pub mod cache_connector_sqlite;
pub mod cache_connector_memory;
