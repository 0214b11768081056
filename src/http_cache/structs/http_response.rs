use crate::http_cache::helpers::{deserialize_body, serialize_body};
use crate::http_cache::structs::http_headers::HttpHeaders;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    #[serde(default)]
    pub headers: HttpHeaders,
    #[serde(default, serialize_with = "serialize_body", deserialize_with = "deserialize_body")]
    pub body: Vec<u8>,
}
