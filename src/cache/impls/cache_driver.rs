use crate::cache::enums::cache_driver::CacheDriver;
use std::fmt;

impl fmt::Display for CacheDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheDriver::file => write!(f, "file"),
            CacheDriver::memcached => write!(f, "memcached"),
            CacheDriver::redis => write!(f, "redis"),
            CacheDriver::sqlite => write!(f, "sqlite"),
            CacheDriver::memory => write!(f, "memory"),
        }
    }
}

impl CacheDriver {
    pub fn url_scheme(&self) -> Option<&'static str> {
        match self {
            CacheDriver::redis => Some("redis://"),
            CacheDriver::memcached => Some("memcache://"),
            _ => None,
        }
    }

    /// Backends whose entries outlive the process and are shared with other processes.
    pub fn is_shared(&self) -> bool {
        matches!(self, CacheDriver::redis | CacheDriver::memcached)
    }
}
