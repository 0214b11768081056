//! Configuration management module.
//!
//! Loads, saves and validates the TOML configuration file. The file holds the
//! log level, the cache groups (one table per group under `[cache.<name>]`)
//! and the HTTP cache adaptor settings.
//!
//! # Example
//!
//! ```rust,ignore
//! use stashgate::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
