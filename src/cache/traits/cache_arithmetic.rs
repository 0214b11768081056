use crate::cache::errors::CacheError;
use async_trait::async_trait;

/// Counter operations. `Ok(None)` means the key does not exist (Redis creates it instead).
#[async_trait]
pub trait CacheArithmetic: Send + Sync {
    async fn increment(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError>;

    async fn decrement(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError>;
}
