//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// One named cache group (driver, prefix, default lifetime, connection parameters).
pub mod cache_group_config;

/// Memcached/Redis server entry of a cache group.
pub mod cache_server_config;

/// HTTP cache adaptor settings.
pub mod http_cache_config;
