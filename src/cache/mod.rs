//! Response cache layer with pluggable storage drivers.
//!
//! Every named cache group owns one [`structs::cache::Cache`] facade bound to a
//! single backend. The facade sanitizes raw ids into storage keys
//! (`prefix + sha1(id)`), encodes values as JSON and forwards the call.
//!
//! # Supported Backends
//!
//! - **File**: one file per entry under a two-level hashed directory tree
//! - **Memcached**: shared, native expiry, counters
//! - **Redis**: shared, native expiry, tags and counters
//! - **SQLite**: single `caches` table, tags and garbage collection
//! - **Memory**: in-process map, every capability
//!
//! # Capabilities
//!
//! Tagging, garbage collection and arithmetic are optional. A facade call that
//! needs a capability the driver lacks fails with
//! [`errors::CacheError::Unsupported`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stashgate::cache::structs::cache_registry::CacheRegistry;
//!
//! let registry = CacheRegistry::from_config(&config);
//! let cache = registry.instance(None).await?;
//! cache.set("user:1", &profile, Some(60)).await?;
//! ```

/// Driver selector, lookup result and delete policy enums.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Key sanitization and shared validation helpers.
pub mod helpers;

/// Implementation blocks for the facade, registry and connectors.
pub mod impls;

/// Data structures for the facade, registry and connectors.
pub mod structs;

/// Backend contract and optional capability traits.
pub mod traits;
