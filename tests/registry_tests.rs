mod common;

use std::sync::Arc;
use stashgate::cache::enums::cache_driver::CacheDriver;
use stashgate::cache::enums::cache_lookup::CacheLookup;
use stashgate::cache::errors::CacheError;
use stashgate::cache::structs::cache::Cache;
use stashgate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use stashgate::cache::structs::cache_item::CacheItem;
use stashgate::config::structs::cache_group_config::CacheGroupConfig;
use tempfile::TempDir;

#[tokio::test]
async fn test_default_group_resolution() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_test_registry(&dir);
    assert_eq!(registry.default_group(), "default");
    assert_eq!(registry.groups(), vec!["default", "memory", "sqlite"]);

    let cache = registry.instance(None).await.unwrap();
    assert_eq!(cache.name(), "default");
    assert_eq!(cache.driver(), CacheDriver::file);
    assert!(registry.is_loaded("default").await);
    assert!(!registry.is_loaded("sqlite").await);
}

#[tokio::test]
async fn test_instances_are_shared() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_test_registry(&dir);
    let first = registry.instance(Some("memory")).await.unwrap();
    first.set("shared", &"value", None).await.unwrap();
    let second = registry.instance(Some("memory")).await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.get::<String>("shared").await.unwrap(), CacheLookup::Hit("value".to_string()));
}

#[tokio::test]
async fn test_groups_are_isolated() {
    let dir = TempDir::new().unwrap();
    let registry = common::create_test_registry(&dir);
    let memory = registry.instance(Some("memory")).await.unwrap();
    let sqlite = registry.instance(Some("sqlite")).await.unwrap();
    memory.set("k", &1, None).await.unwrap();
    assert_eq!(sqlite.get::<i32>("k").await.unwrap(), CacheLookup::Miss);
}

#[tokio::test]
async fn test_failed_group_does_not_poison_others() {
    let mut groups = std::collections::BTreeMap::new();
    groups.insert("good".to_string(), CacheGroupConfig::memory());
    groups.insert("broken".to_string(), CacheGroupConfig::new(CacheDriver::file));
    let registry = stashgate::cache::structs::cache_registry::CacheRegistry::new("good", groups);

    let good = registry.instance(None).await.unwrap();
    assert!(matches!(registry.instance(Some("broken")).await, Err(CacheError::Configuration(_))));
    assert!(!registry.is_loaded("broken").await);
    assert!(Arc::ptr_eq(&good, &registry.instance(Some("good")).await.unwrap()));
    assert!(matches!(registry.instance(Some("absent")).await, Err(CacheError::Configuration(_))));
}

#[tokio::test]
async fn test_register_prebuilt_facade() {
    let registry = common::single_group_registry("default", CacheGroupConfig::memory());
    let custom = Cache::with_backend("custom", "c:", 10, Arc::new(CacheConnectorMemory::new(10)));
    let registered = registry.register("custom", custom).await;
    let fetched = registry.instance(Some("custom")).await.unwrap();
    assert!(Arc::ptr_eq(&registered, &fetched));
    assert_eq!(fetched.prefix(), "c:");
    assert_eq!(fetched.default_expire(), 10);
}

#[tokio::test]
async fn test_sanitized_keys_are_prefix_scoped() {
    let backend = Arc::new(CacheConnectorMemory::new(60));
    let left = Cache::with_backend("left", "left:", 60, backend.clone());
    let right = Cache::with_backend("right", "right:", 60, backend.clone());
    left.set("same", &1, None).await.unwrap();
    right.set("same", &2, None).await.unwrap();
    assert_eq!(left.get::<i32>("same").await.unwrap(), CacheLookup::Hit(1));
    assert_eq!(right.get::<i32>("same").await.unwrap(), CacheLookup::Hit(2));
    assert_eq!(backend.len(), 2);
    assert!(left.sanitize_id("same").starts_with("left:"));
}

#[tokio::test]
async fn test_deferred_items_commit_in_one_batch() {
    let cache = common::create_sqlite_cache().await;
    assert!(cache.commit().await.unwrap());
    for index in 0..5 {
        cache.save_deferred(CacheItem::new(&format!("item-{index}"), &index).unwrap()).unwrap();
    }
    assert_eq!(cache.deferred_len(), 5);
    assert_eq!(cache.get::<i32>("item-0").await.unwrap(), CacheLookup::Miss);
    assert!(cache.commit().await.unwrap());
    assert_eq!(cache.deferred_len(), 0);
    assert_eq!(cache.get::<i32>("item-4").await.unwrap(), CacheLookup::Hit(4));
    assert!(matches!(
        cache.save_deferred(CacheItem::new("", &0).unwrap()),
        Err(CacheError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_get_or_default() {
    let cache = common::create_memory_cache("");
    assert_eq!(cache.get_or("absent", 7).await.unwrap(), 7);
    cache.set("present", &0, None).await.unwrap();
    assert_eq!(cache.get_or("present", 7).await.unwrap(), 0);
}
