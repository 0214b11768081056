use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CacheConnectorFile {
    pub(crate) cache_dir: PathBuf,
    pub(crate) default_expire: u64,
    pub(crate) ignore_on_delete: Arc<Vec<String>>,
}
