use crate::cache::errors::CacheError;
use crate::cache::structs::cache::Cache;
use crate::cache::structs::cache_registry::CacheRegistry;
use crate::config::structs::cache_group_config::CacheGroupConfig;
use crate::config::structs::configuration::Configuration;
use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

impl CacheRegistry {
    pub fn new(default_group: &str, groups: BTreeMap<String, CacheGroupConfig>) -> CacheRegistry {
        CacheRegistry {
            default_group: default_group.to_string(),
            groups,
            instances: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn from_config(config: &Configuration) -> CacheRegistry {
        Self::new(&config.default_group, config.cache.clone())
    }

    pub fn default_group(&self) -> &str {
        &self.default_group
    }

    pub fn groups(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Facade for `group` (the default group for `None`), connected on first use.
    ///
    /// A failed connection is not cached; the next call retries.
    pub async fn instance(&self, group: Option<&str>) -> Result<Arc<Cache>, CacheError> {
        let name = group.unwrap_or(&self.default_group);
        let mut instances = self.instances.lock().await;
        if let Some(cache) = instances.get(name) {
            return Ok(cache.clone());
        }
        let config = self.groups.get(name).ok_or_else(|| {
            CacheError::Configuration(format!("cache group '{}' is not configured", name))
        })?;
        let cache = Arc::new(Cache::new(name, config).await?);
        instances.insert(name.to_string(), cache.clone());
        info!("[Cache] Registered group {}", name);
        Ok(cache)
    }

    /// Installs a prebuilt facade under `name`, replacing any loaded instance.
    pub async fn register(&self, name: &str, cache: Cache) -> Arc<Cache> {
        let cache = Arc::new(cache);
        self.instances.lock().await.insert(name.to_string(), cache.clone());
        cache
    }

    pub async fn is_loaded(&self, name: &str) -> bool {
        self.instances.lock().await.contains_key(name)
    }
}
