use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait CacheTagging: Send + Sync {
    async fn set_with_tags(
        &self,
        key: &str,
        value: &[u8],
        tags: &[String],
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError>;

    /// Removes every entry carrying `tag`, then the tag index itself.
    async fn delete_tag(&self, tag: &str) -> Result<bool, CacheError>;

    /// Entries carrying `tag`, keyed by their stored key.
    async fn find(&self, tag: &str) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError>;
}
