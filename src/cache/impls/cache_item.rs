use crate::cache::errors::CacheError;
use crate::cache::structs::cache_item::CacheItem;
use serde::Serialize;

impl CacheItem {
    pub fn new<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<CacheItem, CacheError> {
        Ok(CacheItem {
            key: key.to_string(),
            value: serde_json::to_vec(value)?,
            lifetime: None,
        })
    }

    pub fn expires_after(mut self, lifetime: u64) -> CacheItem {
        self.lifetime = Some(lifetime);
        self
    }

    pub(crate) fn rekeyed(&self, key: String) -> CacheItem {
        CacheItem {
            key,
            value: self.value.clone(),
            lifetime: self.lifetime,
        }
    }
}
