use crate::config::structs::cache_group_config::CacheGroupConfig;
use crate::config::structs::http_cache_config::HttpCacheConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub default_group: String,
    #[serde(default)]
    pub http_cache: HttpCacheConfig,
    #[serde(default)]
    pub cache: BTreeMap<String, CacheGroupConfig>,
}
