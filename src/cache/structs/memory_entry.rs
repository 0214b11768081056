use std::time::Instant;

#[derive(Debug, Clone)]
pub struct MemoryEntry {
    pub(crate) value: Vec<u8>,
    pub(crate) created: Instant,
    pub(crate) lifetime: u64,
    pub(crate) tags: Vec<String>,
}
