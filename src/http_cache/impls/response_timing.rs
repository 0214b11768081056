use crate::http_cache::structs::response_timing::ResponseTiming;
use chrono::{DateTime, Utc};

impl ResponseTiming {
    pub fn new(request_time: DateTime<Utc>, response_time: DateTime<Utc>) -> ResponseTiming {
        ResponseTiming {
            request_time,
            response_time,
        }
    }

    /// Whole seconds spent waiting for the upstream; never negative.
    pub fn execution_seconds(&self) -> i64 {
        (self.response_time - self.request_time).num_seconds().max(0)
    }
}
