use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTiming {
    pub request_time: DateTime<Utc>,
    pub response_time: DateTime<Utc>,
}
