use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::helpers::ensure_tags;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::memory_entry::MemoryEntry;
use crate::cache::traits::cache_arithmetic::CacheArithmetic;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::cache_garbage_collect::CacheGarbageCollect;
use crate::cache::traits::cache_tagging::CacheTagging;
use ahash::AHashMap;
use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

impl MemoryEntry {
    pub fn new(value: Vec<u8>, lifetime: u64, tags: Vec<String>) -> MemoryEntry {
        MemoryEntry {
            value,
            created: Instant::now(),
            lifetime,
            tags,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.lifetime != 0
            && self
                .created
                .checked_add(Duration::from_secs(self.lifetime))
                .is_some_and(|expiry| now >= expiry)
    }
}

impl CacheConnectorMemory {
    pub fn new(default_expire: u64) -> CacheConnectorMemory {
        info!("[Memory] In-process cache created (default lifetime {}s)", default_expire);
        CacheConnectorMemory {
            entries: RwLock::new(AHashMap::new()),
            default_expire,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn insert(&self, key: &str, value: &[u8], tags: Vec<String>, lifetime: Option<u64>) {
        let entry = MemoryEntry::new(value.to_vec(), lifetime.unwrap_or(self.default_expire), tags);
        self.entries.write().insert(key.to_string(), entry);
    }

    fn lookup(&self, key: &str) -> CacheLookup<Vec<u8>> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return CacheLookup::Miss,
                Some(entry) if !entry.is_expired(now) => return CacheLookup::Hit(entry.value.clone()),
                Some(_) => {}
            }
        }
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        CacheLookup::Miss
    }

    fn add(&self, key: &str, delta: i64) -> Result<Option<i64>, CacheError> {
        let mut entries = self.entries.write();
        let now = Instant::now();
        let Some(entry) = entries.get_mut(key).filter(|entry| !entry.is_expired(now)) else {
            return Ok(None);
        };
        let current: i64 = serde_json::from_slice(&entry.value)
            .map_err(|_| CacheError::InvalidArgument(format!("value under '{}' is not an integer", key)))?;
        let updated = current.saturating_add(delta);
        entry.value = serde_json::to_vec(&updated)?;
        Ok(Some(updated))
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    fn driver(&self) -> CacheDriver {
        CacheDriver::memory
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lookup(key).is_hit())
    }

    async fn get(&self, key: &str) -> Result<CacheLookup<Vec<u8>>, CacheError> {
        Ok(self.lookup(key))
    }

    async fn set(&self, key: &str, value: &[u8], lifetime: Option<u64>) -> Result<bool, CacheError> {
        self.insert(key, value, Vec::new(), lifetime);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.entries.write().remove(key).is_some())
    }

    async fn clear(&self) -> Result<bool, CacheError> {
        self.entries.write().clear();
        Ok(true)
    }

    fn as_tagging(&self) -> Option<&dyn CacheTagging> {
        Some(self)
    }

    fn as_garbage_collect(&self) -> Option<&dyn CacheGarbageCollect> {
        Some(self)
    }

    fn as_arithmetic(&self) -> Option<&dyn CacheArithmetic> {
        Some(self)
    }
}

#[async_trait]
impl CacheTagging for CacheConnectorMemory {
    async fn set_with_tags(
        &self,
        key: &str,
        value: &[u8],
        tags: &[String],
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError> {
        ensure_tags(tags)?;
        self.insert(key, value, tags.to_vec(), lifetime);
        Ok(true)
    }

    async fn delete_tag(&self, tag: &str) -> Result<bool, CacheError> {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        let removed = before - entries.len();
        debug!("[Memory] Deleted tag {} ({} entries)", tag, removed);
        Ok(removed > 0)
    }

    async fn find(&self, tag: &str) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError> {
        let now = Instant::now();
        Ok(self
            .entries
            .read()
            .iter()
            .filter(|(_, entry)| !entry.is_expired(now) && entry.tags.iter().any(|t| t == tag))
            .map(|(key, entry)| (key.clone(), CacheLookup::Hit(entry.value.clone())))
            .collect())
    }
}

#[async_trait]
impl CacheGarbageCollect for CacheConnectorMemory {
    async fn garbage_collect(&self) -> Result<(), CacheError> {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        info!("[Memory] Garbage collection removed {} expired entries", before - entries.len());
        Ok(())
    }
}

#[async_trait]
impl CacheArithmetic for CacheConnectorMemory {
    async fn increment(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError> {
        self.add(key, i64::try_from(step).unwrap_or(i64::MAX))
    }

    async fn decrement(&self, key: &str, step: u64) -> Result<Option<i64>, CacheError> {
        self.add(key, -i64::try_from(step).unwrap_or(i64::MAX))
    }
}
