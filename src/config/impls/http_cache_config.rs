use crate::config::structs::http_cache_config::HttpCacheConfig;

impl HttpCacheConfig {
    pub fn default_request_timeout() -> u64 {
        30
    }
}

impl Default for HttpCacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            group: None,
            allow_private_cache: false,
            request_timeout: Self::default_request_timeout(),
        }
    }
}
