mod configuration_tests {
    use crate::cache::enums::cache_driver::CacheDriver;
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::cache_group_config::CacheGroupConfig;
    use crate::config::structs::configuration::Configuration;

    const SAMPLE: &str = r#"
log_level = "debug"
default_group = "default"

[http_cache]
enabled = true
group = "pages"
allow_private_cache = true

[cache.default]
driver = "file"
cache_dir = "var/cache"

[cache.pages]
driver = "redis"
prefix = "app:"
default_expire = 600
tag_prefix = "_tag"
servers = [{ host = "127.0.0.1", port = 6379, database = 1 }]
"#;

    #[test]
    fn test_init_is_valid() {
        let config = Configuration::init();
        assert_eq!(config.default_group, "default");
        assert_eq!(config.cache["default"].driver, CacheDriver::file);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_sample() {
        let config = Configuration::load(SAMPLE.as_bytes()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.http_cache.group.as_deref(), Some("pages"));
        assert!(config.http_cache.allow_private_cache);
        assert_eq!(config.http_cache.request_timeout, 30);
        let pages = &config.cache["pages"];
        assert_eq!(pages.driver, CacheDriver::redis);
        assert_eq!(pages.default_expire, 600);
        assert_eq!(pages.servers[0].database, Some(1));
        assert_eq!(config.cache["default"].default_expire, 3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Configuration::init();
        let text = config.to_toml().unwrap();
        let reloaded = Configuration::load(text.as_bytes()).unwrap();
        assert_eq!(reloaded.cache, config.cache);
        assert_eq!(reloaded.http_cache, config.http_cache);
    }

    #[test]
    fn test_unknown_driver_is_parse_error() {
        let text = "log_level = \"info\"\ndefault_group = \"x\"\n[cache.x]\ndriver = \"apc\"\n";
        assert!(Configuration::load(text.as_bytes()).is_err());
    }

    #[test]
    fn test_validate_missing_default_group() {
        let mut config = Configuration::init();
        config.default_group = "other".to_string();
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_validate_missing_http_group() {
        let mut config = Configuration::init();
        config.http_cache.group = Some("pages".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_connection_parameters() {
        let mut config = Configuration::init();
        config.cache.insert("db".to_string(), CacheGroupConfig::new(CacheDriver::sqlite));
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("database"));
    }

    #[test]
    fn test_validate_group_name_and_prefix() {
        let mut config = Configuration::init();
        config.cache.insert("Bad-Name".to_string(), CacheGroupConfig::memory());
        assert!(config.validate().is_err());

        let mut config = Configuration::init();
        config.cache.insert("ok".to_string(), CacheGroupConfig::memory().with_prefix("has space"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = Configuration::init();
        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();
        Configuration::save_file(path, Configuration::init().to_toml().unwrap()).unwrap();
        let config = Configuration::load_file(path).unwrap();
        assert_eq!(config.default_group, "default");
    }

    #[test]
    fn test_load_from_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();
        assert!(matches!(
            Configuration::load_from_file(path, false),
            Err(ConfigurationError::IOError(_))
        ));
        assert!(Configuration::load_from_file(path, true).is_err());
        assert!(Configuration::load_from_file(path, false).is_ok());
    }
}

mod cache_group_config_tests {
    use crate::cache::enums::cache_driver::CacheDriver;
    use crate::config::structs::cache_group_config::CacheGroupConfig;

    #[test]
    fn test_builders() {
        let file = CacheGroupConfig::file("cache");
        assert_eq!(file.ignore_on_delete, vec![".gitignore", ".git", ".svn"]);
        assert!(file.missing_parameters().is_empty());

        let redis = CacheGroupConfig::redis("localhost", 6379).with_prefix("app:").with_default_expire(5);
        assert_eq!(redis.prefix, "app:");
        assert_eq!(redis.default_expire, 5);
        assert_eq!(redis.servers.len(), 1);
    }

    #[test]
    fn test_missing_parameters() {
        assert_eq!(CacheGroupConfig::new(CacheDriver::file).missing_parameters(), vec!["cache_dir"]);
        assert_eq!(CacheGroupConfig::new(CacheDriver::redis).missing_parameters(), vec!["servers"]);
        assert!(CacheGroupConfig::memory().missing_parameters().is_empty());
    }
}
