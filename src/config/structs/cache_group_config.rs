use crate::cache::enums::cache_driver::CacheDriver;
use crate::config::structs::cache_server_config::CacheServerConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheGroupConfig {
    pub driver: CacheDriver,
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "CacheGroupConfig::default_expire")]
    pub default_expire: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<CacheServerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_on_delete: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
}
