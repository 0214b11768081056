use crate::http_cache::enums::http_method::HttpMethod;
use crate::http_cache::structs::http_headers::HttpHeaders;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub query: Vec<(String, String)>,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}
