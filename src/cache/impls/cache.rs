use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::helpers::{ensure_key, sanitize_id};
use crate::cache::structs::cache::Cache;
use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::cache_connector_sqlite::CacheConnectorSqlite;
use crate::cache::structs::cache_item::CacheItem;
use crate::cache::traits::cache_arithmetic::CacheArithmetic;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::cache_garbage_collect::CacheGarbageCollect;
use crate::cache::traits::cache_tagging::CacheTagging;
use crate::config::structs::cache_group_config::CacheGroupConfig;
use log::{debug, info};
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("name", &self.name)
            .field("driver", &self.backend.driver())
            .field("prefix", &self.prefix)
            .field("default_expire", &self.default_expire)
            .field("deferred", &self.deferred.lock().len())
            .finish()
    }
}

impl Cache {
    /// Connects the backend described by `config`.
    pub async fn new(name: &str, config: &CacheGroupConfig) -> Result<Cache, CacheError> {
        if let Some(missing) = config.missing_parameters().first() {
            return Err(CacheError::Configuration(format!(
                "cache group '{}' ({}) requires '{}'",
                name, config.driver, missing
            )));
        }
        let backend: Arc<dyn CacheBackend> = match config.driver {
            CacheDriver::file => Arc::new(CacheConnectorFile::connect(
                Path::new(config.cache_dir.as_deref().unwrap_or_default()),
                config.default_expire,
                config.ignore_on_delete.clone(),
            )?),
            CacheDriver::memcached => Arc::new(CacheConnectorMemcache::connect(
                &config.servers,
                config.default_expire,
            )?),
            CacheDriver::redis => Arc::new(
                CacheConnectorRedis::connect(
                    &config.servers,
                    config.tag_prefix.as_deref(),
                    config.default_expire,
                )
                .await?,
            ),
            CacheDriver::sqlite => Arc::new(
                CacheConnectorSqlite::connect(
                    config.database.as_deref().unwrap_or_default(),
                    config.schema.as_deref(),
                    config.default_expire,
                    config.max_connections,
                )
                .await?,
            ),
            CacheDriver::memory => Arc::new(CacheConnectorMemory::new(config.default_expire)),
        };
        info!("[Cache] Group {} ready on the {} driver", name, config.driver);
        Ok(Self::with_backend(name, &config.prefix, config.default_expire, backend))
    }

    pub fn with_backend(
        name: &str,
        prefix: &str,
        default_expire: u64,
        backend: Arc<dyn CacheBackend>,
    ) -> Cache {
        Cache {
            name: name.to_string(),
            prefix: prefix.to_string(),
            default_expire,
            backend,
            deferred: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn default_expire(&self) -> u64 {
        self.default_expire
    }

    pub fn driver(&self) -> CacheDriver {
        self.backend.driver()
    }

    pub fn backend(&self) -> &Arc<dyn CacheBackend> {
        &self.backend
    }

    /// Storage key for a raw id in this group.
    pub fn sanitize_id(&self, id: &str) -> String {
        sanitize_id(&self.prefix, id)
    }

    fn key(&self, id: &str) -> Result<String, CacheError> {
        ensure_key(id)?;
        Ok(self.sanitize_id(id))
    }

    fn tagging(&self) -> Result<&dyn CacheTagging, CacheError> {
        self.backend
            .as_tagging()
            .ok_or_else(|| CacheError::unsupported(self.driver(), "tagging"))
    }

    fn garbage_collector(&self) -> Result<&dyn CacheGarbageCollect, CacheError> {
        self.backend
            .as_garbage_collect()
            .ok_or_else(|| CacheError::unsupported(self.driver(), "garbage collection"))
    }

    fn arithmetic(&self) -> Result<&dyn CacheArithmetic, CacheError> {
        self.backend
            .as_arithmetic()
            .ok_or_else(|| CacheError::unsupported(self.driver(), "arithmetic"))
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        self.backend.ping().await
    }

    pub async fn has(&self, id: &str) -> Result<bool, CacheError> {
        let key = self.key(id)?;
        self.backend.has(&key).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<CacheLookup<T>, CacheError> {
        let key = self.key(id)?;
        match self.backend.get(&key).await? {
            CacheLookup::Hit(bytes) => Ok(CacheLookup::Hit(serde_json::from_slice(&bytes)?)),
            CacheLookup::Miss => Ok(CacheLookup::Miss),
        }
    }

    pub async fn get_or<T: DeserializeOwned>(&self, id: &str, default: T) -> Result<T, CacheError> {
        Ok(self.get(id).await?.unwrap_or(default))
    }

    /// Result is keyed by the raw ids passed in.
    pub async fn get_multiple<T: DeserializeOwned>(
        &self,
        ids: &[&str],
    ) -> Result<BTreeMap<String, CacheLookup<T>>, CacheError> {
        let mut keys = Vec::with_capacity(ids.len());
        for id in ids {
            keys.push(self.key(id)?);
        }
        let mut found = self.backend.get_multiple(&keys).await?;
        let mut result = BTreeMap::new();
        for (id, key) in ids.iter().zip(keys.iter()) {
            let lookup = match found.remove(key) {
                Some(CacheLookup::Hit(bytes)) => CacheLookup::Hit(serde_json::from_slice(&bytes)?),
                _ => CacheLookup::Miss,
            };
            result.insert(id.to_string(), lookup);
        }
        Ok(result)
    }

    pub async fn set<T: Serialize + ?Sized>(
        &self,
        id: &str,
        value: &T,
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError> {
        let key = self.key(id)?;
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(&key, &bytes, lifetime).await
    }

    /// Items carry raw ids; they are sanitized before reaching the backend.
    pub async fn set_multiple(&self, items: &[CacheItem]) -> Result<bool, CacheError> {
        let mut sanitized = Vec::with_capacity(items.len());
        for item in items {
            sanitized.push(item.rekeyed(self.key(&item.key)?));
        }
        self.backend.set_multiple(&sanitized).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, CacheError> {
        let key = self.key(id)?;
        self.backend.delete(&key).await
    }

    pub async fn delete_multiple(&self, ids: &[&str]) -> Result<bool, CacheError> {
        let mut keys = Vec::with_capacity(ids.len());
        for id in ids {
            keys.push(self.key(id)?);
        }
        self.backend.delete_multiple(&keys).await
    }

    /// Clears the whole backend, not only this group's prefix.
    pub async fn clear(&self) -> Result<bool, CacheError> {
        info!("[Cache] Clearing group {} ({})", self.name, self.driver());
        self.backend.clear().await
    }

    pub async fn set_with_tags<T: Serialize + ?Sized>(
        &self,
        id: &str,
        value: &T,
        tags: &[&str],
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError> {
        let tagging = self.tagging()?;
        let key = self.key(id)?;
        let bytes = serde_json::to_vec(value)?;
        let tags: Vec<String> = tags.iter().map(|tag| tag.to_string()).collect();
        tagging.set_with_tags(&key, &bytes, &tags, lifetime).await
    }

    pub async fn delete_tag(&self, tag: &str) -> Result<bool, CacheError> {
        self.tagging()?.delete_tag(tag).await
    }

    /// Entries labelled `tag`, keyed by their storage key (raw ids are not recoverable).
    pub async fn get_items_with_tag<T: DeserializeOwned>(
        &self,
        tag: &str,
    ) -> Result<BTreeMap<String, CacheLookup<T>>, CacheError> {
        let found = self.tagging()?.find(tag).await?;
        let mut result = BTreeMap::new();
        for (key, lookup) in found {
            let decoded = match lookup {
                CacheLookup::Hit(bytes) => CacheLookup::Hit(serde_json::from_slice(&bytes)?),
                CacheLookup::Miss => CacheLookup::Miss,
            };
            result.insert(key, decoded);
        }
        Ok(result)
    }

    pub async fn garbage_collect(&self) -> Result<(), CacheError> {
        self.garbage_collector()?.garbage_collect().await
    }

    pub async fn increment(&self, id: &str, step: u64) -> Result<Option<i64>, CacheError> {
        let arithmetic = self.arithmetic()?;
        let key = self.key(id)?;
        arithmetic.increment(&key, step).await
    }

    pub async fn decrement(&self, id: &str, step: u64) -> Result<Option<i64>, CacheError> {
        let arithmetic = self.arithmetic()?;
        let key = self.key(id)?;
        arithmetic.decrement(&key, step).await
    }

    /// Queues `item` for the next [`Cache::commit`].
    pub fn save_deferred(&self, item: CacheItem) -> Result<bool, CacheError> {
        ensure_key(&item.key)?;
        self.deferred.lock().push(item);
        Ok(true)
    }

    pub fn deferred_len(&self) -> usize {
        self.deferred.lock().len()
    }

    pub async fn commit(&self) -> Result<bool, CacheError> {
        let pending: Vec<CacheItem> = std::mem::take(&mut *self.deferred.lock());
        if pending.is_empty() {
            return Ok(true);
        }
        debug!("[Cache] Committing {} deferred items in group {}", pending.len(), self.name);
        self.set_multiple(&pending).await
    }
}
