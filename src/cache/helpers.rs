use crate::cache::errors::CacheError;
use sha1::{Digest, Sha1};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// `prefix + sha1(id)`: bounded length and safe characters for every backend.
pub fn sanitize_id(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, sha1_hex(id.as_bytes()))
}

pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

pub fn ensure_key(key: &str) -> Result<(), CacheError> {
    if key.is_empty() {
        return Err(CacheError::InvalidArgument("cache key must not be empty".to_string()));
    }
    Ok(())
}

/// Tags are stored between `<` and `>` and joined by `,`, so those characters are reserved.
pub fn ensure_tags(tags: &[String]) -> Result<(), CacheError> {
    for tag in tags {
        if tag.is_empty() || tag.contains(['<', '>', ',']) {
            return Err(CacheError::InvalidArgument(format!("invalid tag name '{}'", tag)));
        }
    }
    Ok(())
}
