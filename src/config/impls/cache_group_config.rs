use crate::cache::enums::cache_driver::CacheDriver;
use crate::config::structs::cache_group_config::CacheGroupConfig;
use crate::config::structs::cache_server_config::CacheServerConfig;

impl CacheGroupConfig {
    pub fn default_expire() -> u64 {
        3600
    }

    pub fn new(driver: CacheDriver) -> CacheGroupConfig {
        CacheGroupConfig {
            driver,
            prefix: String::new(),
            default_expire: Self::default_expire(),
            servers: Vec::new(),
            tag_prefix: None,
            cache_dir: None,
            ignore_on_delete: Vec::new(),
            database: None,
            schema: None,
            max_connections: None,
        }
    }

    pub fn file(cache_dir: &str) -> CacheGroupConfig {
        let mut config = Self::new(CacheDriver::file);
        config.cache_dir = Some(cache_dir.to_string());
        config.ignore_on_delete = vec![".gitignore".to_string(), ".git".to_string(), ".svn".to_string()];
        config
    }

    pub fn sqlite(database: &str) -> CacheGroupConfig {
        let mut config = Self::new(CacheDriver::sqlite);
        config.database = Some(database.to_string());
        config
    }

    pub fn memcached(host: &str, port: u16) -> CacheGroupConfig {
        let mut config = Self::new(CacheDriver::memcached);
        config.servers.push(CacheServerConfig::new(host, port));
        config
    }

    pub fn redis(host: &str, port: u16) -> CacheGroupConfig {
        let mut config = Self::new(CacheDriver::redis);
        config.servers.push(CacheServerConfig::new(host, port));
        config
    }

    pub fn memory() -> CacheGroupConfig {
        Self::new(CacheDriver::memory)
    }

    pub fn with_prefix(mut self, prefix: &str) -> CacheGroupConfig {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_default_expire(mut self, default_expire: u64) -> CacheGroupConfig {
        self.default_expire = default_expire;
        self
    }

    /// Connection parameters the driver cannot start without.
    pub fn missing_parameters(&self) -> Vec<&'static str> {
        match self.driver {
            CacheDriver::file if self.cache_dir.as_deref().is_none_or(str::is_empty) => vec!["cache_dir"],
            CacheDriver::sqlite if self.database.as_deref().is_none_or(str::is_empty) => vec!["database"],
            CacheDriver::memcached | CacheDriver::redis if self.servers.is_empty() => vec!["servers"],
            _ => Vec::new(),
        }
    }
}

impl CacheServerConfig {
    pub fn new(host: &str, port: u16) -> CacheServerConfig {
        CacheServerConfig {
            host: host.to_string(),
            port,
            weight: None,
            password: None,
            database: None,
            prefix: None,
        }
    }
}
