use crate::cache::structs::cache::Cache;
use crate::config::structs::cache_group_config::CacheGroupConfig;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct CacheRegistry {
    pub(crate) default_group: String,
    pub(crate) groups: BTreeMap<String, CacheGroupConfig>,
    pub(crate) instances: Mutex<BTreeMap<String, Arc<Cache>>>,
}
