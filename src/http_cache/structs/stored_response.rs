use crate::http_cache::structs::http_response::HttpResponse;
use serde::{Deserialize, Serialize};

/// Cached response with the Unix time its entry expires.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredResponse {
    pub response: HttpResponse,
    pub expires_at: i64,
}
