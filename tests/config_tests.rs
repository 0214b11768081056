mod common;

use std::fs;
use stashgate::cache::enums::cache_driver::CacheDriver;
use stashgate::cache::structs::cache_registry::CacheRegistry;
use stashgate::config::structs::configuration::Configuration;
use tempfile::TempDir;

#[tokio::test]
async fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let cache_dir = temp_dir.path().join("cache");
    let config_content = format!(
        r#"
log_level = "info"
default_group = "default"

[http_cache]
enabled = true
group = "pages"

[cache.default]
driver = "file"
cache_dir = "{}"

[cache.pages]
driver = "sqlite"
prefix = "page:"
default_expire = 300
database = ":memory:"
"#,
        cache_dir.display()
    );
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.cache["pages"].driver, CacheDriver::sqlite);
    assert_eq!(config.cache["pages"].prefix, "page:");

    let registry = CacheRegistry::from_config(&config);
    let pages = registry.instance(Some("pages")).await.unwrap();
    assert_eq!(pages.default_expire(), 300);
    let default = registry.instance(None).await.unwrap();
    assert_eq!(default.driver(), CacheDriver::file);
    assert!(cache_dir.is_dir());
}

#[tokio::test]
async fn test_config_broken_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "this is = = not toml").unwrap();
    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}

#[tokio::test]
async fn test_config_create_on_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();
    assert!(Configuration::load_from_file(path, true).is_err());
    assert!(config_path.exists());
    let created = fs::read_to_string(&config_path).unwrap();
    assert!(created.contains("[cache.default]"));
    assert!(created.contains("driver = \"file\""));
}

#[tokio::test]
async fn test_test_config_is_valid() {
    let temp_dir = TempDir::new().unwrap();
    let config = common::create_test_config(&temp_dir);
    assert!(config.validate().is_ok());
}
