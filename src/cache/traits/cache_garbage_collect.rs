use crate::cache::errors::CacheError;
use async_trait::async_trait;

#[async_trait]
pub trait CacheGarbageCollect: Send + Sync {
    async fn garbage_collect(&self) -> Result<(), CacheError>;
}
