use crate::cache::structs::cache::Cache;
use crate::http_cache::structs::http_request::HttpRequest;
use std::sync::Arc;

pub type KeyGenerator = Arc<dyn Fn(&HttpRequest) -> String + Send + Sync>;

/// Without a cache every request goes straight to the executor.
pub struct HttpCache {
    pub(crate) cache: Option<Arc<Cache>>,
    pub(crate) allow_private_cache: bool,
    pub(crate) key_generator: Option<KeyGenerator>,
}
