#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheItem {
    pub key: String,
    pub value: Vec<u8>,
    pub lifetime: Option<u64>,
}
