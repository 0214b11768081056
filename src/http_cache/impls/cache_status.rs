use crate::http_cache::enums::cache_status::CacheStatus;
use std::fmt;

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheStatus::HIT => write!(f, "HIT"),
            CacheStatus::MISS => write!(f, "MISS"),
            CacheStatus::SAVED => write!(f, "SAVED"),
        }
    }
}
