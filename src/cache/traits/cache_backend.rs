use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_item::CacheItem;
use crate::cache::traits::cache_arithmetic::CacheArithmetic;
use crate::cache::traits::cache_garbage_collect::CacheGarbageCollect;
use crate::cache::traits::cache_tagging::CacheTagging;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Storage driver contract. Keys handed to a backend are already sanitized.
///
/// Optional capabilities are reached through the `as_*` queries; a backend
/// advertises a capability by overriding the matching query to return itself.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    fn driver(&self) -> CacheDriver;

    async fn ping(&self) -> Result<(), CacheError>;

    /// Existence check. Not atomic with a following `get`; some backends refuse it.
    async fn has(&self, key: &str) -> Result<bool, CacheError>;

    async fn get(&self, key: &str) -> Result<CacheLookup<Vec<u8>>, CacheError>;

    /// Every requested key is present in the result, absent ones as `Miss`.
    async fn get_multiple(
        &self,
        keys: &[String],
    ) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError> {
        let mut found = BTreeMap::new();
        for key in keys {
            found.insert(key.clone(), self.get(key).await?);
        }
        Ok(found)
    }

    /// `lifetime` of `None` uses the backend's default expiry, `Some(0)` never expires.
    async fn set(&self, key: &str, value: &[u8], lifetime: Option<u64>) -> Result<bool, CacheError>;

    async fn set_multiple(&self, items: &[CacheItem]) -> Result<bool, CacheError> {
        let mut stored = true;
        for item in items {
            stored &= self.set(&item.key, &item.value, item.lifetime).await?;
        }
        Ok(stored)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    async fn delete_multiple(&self, keys: &[String]) -> Result<bool, CacheError> {
        let mut deleted = true;
        for key in keys {
            deleted &= self.delete(key).await?;
        }
        Ok(deleted)
    }

    /// Wipes the whole backend namespace, including entries written by other consumers.
    async fn clear(&self) -> Result<bool, CacheError>;

    fn as_tagging(&self) -> Option<&dyn CacheTagging> {
        None
    }

    fn as_garbage_collect(&self) -> Option<&dyn CacheGarbageCollect> {
        None
    }

    fn as_arithmetic(&self) -> Option<&dyn CacheArithmetic> {
        None
    }
}
