use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::helpers::unix_timestamp;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_item::CacheItem;
use crate::cache::traits::cache_arithmetic::CacheArithmetic;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_server_config::CacheServerConfig;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Memcached reads expirations above 30 days as absolute Unix timestamps.
pub const CACHE_CEILING: u64 = 2_592_000;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("default_expire", &self.default_expire)
            .finish()
    }
}

impl CacheConnectorMemcache {
    #[tracing::instrument(level = "debug", skip(servers))]
    pub fn connect(servers: &[CacheServerConfig], default_expire: u64) -> Result<Self, CacheError> {
        if servers.is_empty() {
            return Err(CacheError::Configuration(
                "memcached driver requires at least one entry in 'servers'".to_string(),
            ));
        }
        let urls: Vec<String> = servers
            .iter()
            .map(|server| format!("{}{}:{}", CacheDriver::memcached.url_scheme().unwrap_or_default(), server.host, server.port))
            .collect();
        if servers.iter().any(|server| server.weight.is_some()) {
            warn!("[Memcached] Server weights are not supported by the client and are ignored");
        }
        let client = memcache::Client::connect(urls.clone())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        info!("[Memcached] Connected to {}", urls.join(", "));
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            default_expire,
        })
    }

    /// Lifetimes above [`CACHE_CEILING`] become absolute timestamps, `0` stays "never".
    pub fn expiration(lifetime: u64, now: u64) -> u32 {
        let expiration = if lifetime > CACHE_CEILING {
            now.saturating_add(lifetime)
        } else {
            lifetime
        };
        u32::try_from(expiration).unwrap_or(u32::MAX)
    }

    /// The client has no per-item TTL in a batch, so every item gets the group default.
    pub fn flatten_batch(items: &[CacheItem], default_expire: u64) -> Vec<(&str, &[u8], u64)> {
        items
            .iter()
            .map(|item| (item.key.as_str(), item.value.as_slice(), default_expire))
            .collect()
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    fn driver(&self) -> CacheDriver {
        CacheDriver::memcached
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let client = self.client.lock();
        client.version().map_err(CacheError::MemcacheError)?;
        Ok(())
    }

    /// Implemented through `get`; the answer can be stale by the time the caller reads.
    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key).await?.is_hit())
    }

    async fn get(&self, key: &str) -> Result<CacheLookup<Vec<u8>>, CacheError> {
        let client = self.client.lock();
        match client.get::<Vec<u8>>(key) {
            Ok(value) => Ok(value.into()),
            Err(e) => Err(CacheError::MemcacheError(e)),
        }
    }

    async fn get_multiple(
        &self,
        keys: &[String],
    ) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError> {
        let client = self.client.lock();
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let mut found = client
            .gets::<Vec<u8>>(&key_refs)
            .map_err(CacheError::MemcacheError)?;
        Ok(keys
            .iter()
            .map(|key| (key.clone(), found.remove(key).into()))
            .collect())
    }

    async fn set(&self, key: &str, value: &[u8], lifetime: Option<u64>) -> Result<bool, CacheError> {
        let client = self.client.lock();
        let expiration = Self::expiration(lifetime.unwrap_or(self.default_expire), unix_timestamp());
        client.set(key, value, expiration).map_err(CacheError::MemcacheError)?;
        debug!("[Memcached] Set {} (expiration {})", key, expiration);
        Ok(true)
    }

    async fn set_multiple(&self, items: &[CacheItem]) -> Result<bool, CacheError> {
        if items.is_empty() {
            return Ok(true);
        }
        if items.iter().any(|item| item.lifetime.is_some_and(|lifetime| lifetime != self.default_expire)) {
            debug!(
                "[Memcached] Batch of {} items stored with the default lifetime of {}s",
                items.len(),
                self.default_expire
            );
        }
        let client = self.client.lock();
        let now = unix_timestamp();
        for (key, value, lifetime) in Self::flatten_batch(items, self.default_expire) {
            client
                .set(key, value, Self::expiration(lifetime, now))
                .map_err(CacheError::MemcacheError)?;
        }
        debug!("[Memcached] Batch set {} items", items.len());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let client = self.client.lock();
        let deleted = client.delete(key).map_err(CacheError::MemcacheError)?;
        debug!("[Memcached] Deleted {}", key);
        Ok(deleted)
    }

    async fn clear(&self) -> Result<bool, CacheError> {
        let client = self.client.lock();
        client.flush().map_err(CacheError::MemcacheError)?;
        warn!("[Memcached] Flushed every entry on the configured servers");
        Ok(true)
    }

    fn as_arithmetic(&self) -> Option<&dyn CacheArithmetic> {
        Some(self)
    }
}

#[async_trait]
impl CacheArithmetic for CacheConnectorMemcache {
    async fn increment(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError> {
        let client = self.client.lock();
        if client.get::<Vec<u8>>(key).map_err(CacheError::MemcacheError)?.is_none() {
            return Ok(None);
        }
        let value = client.increment(key, step).map_err(CacheError::MemcacheError)?;
        Ok(Some(value as i64))
    }

    /// Memcached floors counters at zero.
    async fn decrement(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError> {
        let client = self.client.lock();
        if client.get::<Vec<u8>>(key).map_err(CacheError::MemcacheError)?.is_none() {
            return Ok(None);
        }
        let value = client.decrement(key, step).map_err(CacheError::MemcacheError)?;
        Ok(Some(value as i64))
    }
}
