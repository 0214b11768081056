#![allow(dead_code)]
use rand::RngExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use stashgate::cache::structs::cache::Cache;
use stashgate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use stashgate::cache::structs::cache_registry::CacheRegistry;
use stashgate::config::structs::cache_group_config::CacheGroupConfig;
use stashgate::config::structs::configuration::Configuration;
use tempfile::TempDir;

pub type TestCache = Arc<Cache>;

pub fn create_memory_cache(prefix: &str) -> TestCache {
    Arc::new(Cache::with_backend("memory", prefix, 60, Arc::new(CacheConnectorMemory::new(60))))
}

pub async fn create_file_cache(dir: &TempDir) -> TestCache {
    let config = CacheGroupConfig::file(dir.path().to_str().unwrap()).with_prefix("test:");
    Arc::new(Cache::new("files", &config).await.unwrap())
}

pub async fn create_sqlite_cache() -> TestCache {
    let config = CacheGroupConfig::sqlite(":memory:").with_prefix("test:");
    Arc::new(Cache::new("sqlite", &config).await.unwrap())
}

pub fn create_test_config(dir: &TempDir) -> Configuration {
    let mut config = Configuration::init();
    config.cache.insert(
        "default".to_string(),
        CacheGroupConfig::file(dir.path().join("default").to_str().unwrap()),
    );
    config.cache.insert("memory".to_string(), CacheGroupConfig::memory().with_prefix("mem:"));
    config.cache.insert("sqlite".to_string(), CacheGroupConfig::sqlite(":memory:"));
    config
}

pub fn create_test_registry(dir: &TempDir) -> CacheRegistry {
    CacheRegistry::from_config(&create_test_config(dir))
}

pub fn single_group_registry(name: &str, group: CacheGroupConfig) -> CacheRegistry {
    let mut groups = BTreeMap::new();
    groups.insert(name.to_string(), group);
    CacheRegistry::new(name, groups)
}

pub fn random_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 8] = rng.random();
    hex_string(&bytes)
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
