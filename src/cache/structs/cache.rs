use crate::cache::structs::cache_item::CacheItem;
use crate::cache::traits::cache_backend::CacheBackend;
use parking_lot::Mutex;
use std::sync::Arc;

/// Facade over one configured backend. Not `Clone`: a group is shared through `Arc<Cache>`.
pub struct Cache {
    pub(crate) name: String,
    pub(crate) prefix: String,
    pub(crate) default_expire: u64,
    pub(crate) backend: Arc<dyn CacheBackend>,
    pub(crate) deferred: Mutex<Vec<CacheItem>>,
}
