use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::helpers::ensure_tags;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::cache_item::CacheItem;
use crate::cache::traits::cache_arithmetic::CacheArithmetic;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::cache_tagging::CacheTagging;
use crate::config::structs::cache_server_config::CacheServerConfig;
use async_trait::async_trait;
use log::{debug, info, warn};
use redis::AsyncCommands;
use std::collections::BTreeMap;

pub const DEFAULT_TAG_PREFIX: &str = "_tag";

impl CacheConnectorRedis {
    #[tracing::instrument(level = "debug", skip(servers))]
    pub async fn connect(
        servers: &[CacheServerConfig],
        tag_prefix: Option<&str>,
        default_expire: u64,
    ) -> Result<Self, CacheError> {
        let server = servers.first().ok_or_else(|| {
            CacheError::Configuration("redis driver requires at least one entry in 'servers'".to_string())
        })?;
        if servers.len() > 1 {
            warn!("[Redis] Only the first configured server is used, {} ignored", servers.len() - 1);
        }
        let url = Self::connection_url(server);
        let client = redis::Client::open(url.as_str())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        info!("[Redis] Connected to {}:{}", server.host, server.port);
        Ok(Self {
            connection,
            key_prefix: server.prefix.clone().unwrap_or_default(),
            tag_prefix: tag_prefix.unwrap_or(DEFAULT_TAG_PREFIX).to_string(),
            default_expire,
        })
    }

    pub fn connection_url(server: &CacheServerConfig) -> String {
        let scheme = CacheDriver::redis.url_scheme().unwrap_or_default();
        let auth = match &server.password {
            Some(password) if !password.is_empty() => format!(":{}@", password),
            _ => String::new(),
        };
        let database = server.database.map(|db| format!("/{}", db)).unwrap_or_default();
        format!("{}{}{}:{}{}", scheme, auth, server.host, server.port, database)
    }

    fn redis_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    pub fn tag_list_key(&self, tag: &str) -> String {
        format!("{}{}:{}", self.key_prefix, self.tag_prefix, tag)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    fn driver(&self) -> CacheDriver {
        CacheDriver::redis
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(())
    }

    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(self.redis_key(key)).await?;
        Ok(exists)
    }

    async fn get(&self, key: &str) -> Result<CacheLookup<Vec<u8>>, CacheError> {
        let mut conn = self.connection.clone();
        let value: Option<Vec<u8>> = conn.get(self.redis_key(key)).await?;
        Ok(value.into())
    }

    async fn get_multiple(
        &self,
        keys: &[String],
    ) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError> {
        if keys.is_empty() {
            return Ok(BTreeMap::new());
        }
        let mut conn = self.connection.clone();
        let redis_keys: Vec<String> = keys.iter().map(|key| self.redis_key(key)).collect();
        let values: Vec<Option<Vec<u8>>> = redis::cmd("MGET")
            .arg(&redis_keys)
            .query_async(&mut conn)
            .await?;
        Ok(keys.iter().cloned().zip(values.into_iter().map(CacheLookup::from)).collect())
    }

    async fn set(&self, key: &str, value: &[u8], lifetime: Option<u64>) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let lifetime = lifetime.unwrap_or(self.default_expire);
        let redis_key = self.redis_key(key);
        if lifetime > 0 {
            conn.set_ex::<_, _, ()>(&redis_key, value, lifetime).await?;
        } else {
            conn.set::<_, _, ()>(&redis_key, value).await?;
        }
        debug!("[Redis] Set {} (lifetime {}s)", redis_key, lifetime);
        Ok(true)
    }

    async fn set_multiple(&self, items: &[CacheItem]) -> Result<bool, CacheError> {
        if items.is_empty() {
            return Ok(true);
        }
        let mut conn = self.connection.clone();
        let mut pipe = redis::pipe();
        for item in items {
            let lifetime = item.lifetime.unwrap_or(self.default_expire);
            let redis_key = self.redis_key(&item.key);
            if lifetime > 0 {
                pipe.set_ex(&redis_key, item.value.as_slice(), lifetime).ignore();
            } else {
                pipe.set(&redis_key, item.value.as_slice()).ignore();
            }
        }
        pipe.query_async::<()>(&mut conn).await?;
        debug!("[Redis] Batch set {} items", items.len());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let removed: u64 = conn.del(self.redis_key(key)).await?;
        debug!("[Redis] Deleted {}", key);
        Ok(removed > 0)
    }

    async fn delete_multiple(&self, keys: &[String]) -> Result<bool, CacheError> {
        if keys.is_empty() {
            return Ok(true);
        }
        let mut conn = self.connection.clone();
        let redis_keys: Vec<String> = keys.iter().map(|key| self.redis_key(key)).collect();
        let removed: u64 = conn.del(&redis_keys).await?;
        Ok(removed == keys.len() as u64)
    }

    async fn clear(&self) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("FLUSHDB").query_async::<()>(&mut conn).await?;
        warn!("[Redis] Flushed the selected database");
        Ok(true)
    }

    fn as_tagging(&self) -> Option<&dyn CacheTagging> {
        Some(self)
    }

    fn as_arithmetic(&self) -> Option<&dyn CacheArithmetic> {
        Some(self)
    }
}

/// Tag lists hold member keys only. Deleting or expiring a single key leaves it in
/// its lists until the whole tag is deleted; `find` reports such members as `Miss`.
#[async_trait]
impl CacheTagging for CacheConnectorRedis {
    async fn set_with_tags(
        &self,
        key: &str,
        value: &[u8],
        tags: &[String],
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError> {
        ensure_tags(tags)?;
        self.set(key, value, lifetime).await?;
        let mut conn = self.connection.clone();
        let mut pipe = redis::pipe();
        for tag in tags {
            pipe.rpush(self.tag_list_key(tag), key).ignore();
        }
        pipe.query_async::<()>(&mut conn).await?;
        Ok(true)
    }

    async fn delete_tag(&self, tag: &str) -> Result<bool, CacheError> {
        let mut conn = self.connection.clone();
        let list_key = self.tag_list_key(tag);
        let members: Vec<String> = conn.lrange(&list_key, 0, -1).await?;
        if !members.is_empty() {
            let redis_keys: Vec<String> = members.iter().map(|key| self.redis_key(key)).collect();
            conn.del::<_, ()>(&redis_keys).await?;
        }
        let removed: u64 = conn.del(&list_key).await?;
        debug!("[Redis] Deleted tag {} with {} members", tag, members.len());
        Ok(removed > 0)
    }

    async fn find(&self, tag: &str) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError> {
        let mut conn = self.connection.clone();
        let members: Vec<String> = conn.lrange(self.tag_list_key(tag), 0, -1).await?;
        self.get_multiple(&members).await
    }
}

#[async_trait]
impl CacheArithmetic for CacheConnectorRedis {
    async fn increment(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError> {
        let mut conn = self.connection.clone();
        let value: i64 = conn.incr(self.redis_key(key), step).await?;
        Ok(Some(value))
    }

    async fn decrement(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError> {
        let mut conn = self.connection.clone();
        let value: i64 = conn.decr(self.redis_key(key), step).await?;
        Ok(Some(value))
    }
}
