//! HTTP response cache adaptor.
//!
//! [`structs::http_cache::HttpCache`] wraps a [`traits::request_executor::RequestExecutor`]
//! and decides per request whether to serve a stored response, call the
//! upstream, and store the result. Freshness follows the HTTP/1.1 age
//! calculation (`Date`, `Age`, `Cache-Control`, `Expires`).
//!
//! Responses carry `x-cache-status` (`HIT`, `MISS` or `SAVED`) and, on a hit,
//! `x-cache-hits` with the number of times the entry was served.
//!
//! POST, PUT and DELETE invalidate the request's key and are never cached.

/// Method and status enums.
pub mod enums;

/// HTTP-date parsing and body encoding helpers.
pub mod helpers;

/// Implementation blocks for the adaptor and its value types.
pub mod impls;

/// Request, response and adaptor structures.
pub mod structs;

/// Upstream executor trait.
pub mod traits;

#[cfg(test)]
mod tests;
