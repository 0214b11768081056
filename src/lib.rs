//! # Stashgate
//!
//! Response cache subsystem with pluggable storage drivers and an HTTP cache
//! adaptor.
//!
//! ## Overview
//!
//! Applications configure named cache groups, each bound to one driver
//! (file, Memcached, Redis, SQLite or in-process memory). A group is reached
//! through a [`cache::structs::cache::Cache`] facade obtained from the
//! [`cache::structs::cache_registry::CacheRegistry`]. The HTTP adaptor sits in
//! front of an outbound request executor and stores cacheable responses in a
//! group according to their freshness headers.
//!
//! ## Features
//!
//! - **Five drivers**: file tree, Memcached, Redis, SQLite, memory
//! - **Optional capabilities**: tagging, garbage collection, counters
//! - **Deferred writes**: queue items and commit them as one batch
//! - **HTTP caching**: `Cache-Control`, `Expires`, `Age` and `Date` aware
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stashgate::cache::structs::cache_registry::CacheRegistry;
//! use stashgate::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! let registry = CacheRegistry::from_config(&config);
//! let cache = registry.instance(None).await?;
//! cache.set("greeting", "hello", Some(60)).await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Facade, registry and storage drivers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http_cache`] - HTTP response caching adaptor
//! - [`logging`] - Log output setup
//! - [`structs`] - CLI argument parsing

/// Cache facade, registry and storage drivers.
///
/// Keys are sanitized to `prefix + sha1(id)` before reaching a driver.
/// Values are JSON-encoded, so `null`, `false` and `0` remain distinguishable
/// from a miss.
pub mod cache;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration file that
/// defines the cache groups and HTTP cache settings.
pub mod config;

/// HTTP response cache adaptor.
///
/// Wraps a request executor, serves fresh responses from a cache group and
/// stores new ones with a lifetime derived from their headers.
pub mod http_cache;

/// Colored log output through `fern`.
pub mod logging;

/// CLI argument parsing.
pub mod structs;
