//! Implementation blocks for the HTTP cache adaptor.

pub mod http_method;
pub mod cache_status;
pub mod http_headers;
pub mod http_request;
pub mod http_response;
pub mod cache_control;
pub mod response_timing;
pub mod stored_response;
pub mod http_cache;
pub mod reqwest_executor;
