//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod cache_group_config;
pub mod http_cache_config;
