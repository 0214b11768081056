use crate::cache::structs::memory_entry::MemoryEntry;
use ahash::AHashMap;
use parking_lot::RwLock;

#[derive(Debug)]
pub struct CacheConnectorMemory {
    pub(crate) entries: RwLock<AHashMap<String, MemoryEntry>>,
    pub(crate) default_expire: u64,
}
