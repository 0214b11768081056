use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpCacheConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub allow_private_cache: bool,
    #[serde(default = "HttpCacheConfig::default_request_timeout")]
    pub request_timeout: u64,
}
