use crate::http_cache::structs::http_response::HttpResponse;
use crate::http_cache::structs::stored_response::StoredResponse;
use chrono::{DateTime, Utc};

impl StoredResponse {
    pub fn new(response: HttpResponse, lifetime: u64, now: DateTime<Utc>) -> StoredResponse {
        let lifetime = i64::try_from(lifetime).unwrap_or(i64::MAX);
        StoredResponse {
            response,
            expires_at: now.timestamp().saturating_add(lifetime),
        }
    }

    /// Seconds left before the entry expires, at least one.
    pub fn remaining(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from(self.expires_at.saturating_sub(now.timestamp()))
            .unwrap_or(0)
            .max(1)
    }
}
