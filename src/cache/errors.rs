use crate::cache::enums::cache_driver::CacheDriver;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Cache driver '{driver}' does not support {capability}")]
    Unsupported {
        driver: CacheDriver,
        capability: &'static str,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Corrupted cache entry: {0}")]
    CorruptedEntry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    MemcacheError(#[from] memcache::MemcacheError),

    #[error("Request error: {0}")]
    Request(String),
}

impl CacheError {
    pub fn unsupported(driver: CacheDriver, capability: &'static str) -> Self {
        CacheError::Unsupported { driver, capability }
    }
}
