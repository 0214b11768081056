use crate::cache::errors::CacheError;
use crate::http_cache::enums::http_method::HttpMethod;
use crate::http_cache::structs::http_headers::HttpHeaders;
use crate::http_cache::structs::http_request::HttpRequest;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

impl HttpRequest {
    pub fn new(method: HttpMethod, uri: &str) -> HttpRequest {
        HttpRequest {
            method,
            uri: uri.to_string(),
            query: Vec::new(),
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    /// Splits `url` into the bare URI and its decoded query pairs.
    pub fn from_url(method: HttpMethod, url: &str) -> Result<HttpRequest, CacheError> {
        let mut parsed = reqwest::Url::parse(url)
            .map_err(|e| CacheError::InvalidArgument(format!("invalid URL '{}': {}", url, e)))?;
        let query: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        parsed.set_query(None);
        parsed.set_fragment(None);
        let mut request = HttpRequest::new(method, parsed.as_str());
        request.query = query;
        Ok(request)
    }

    pub fn with_query(mut self, name: &str, value: &str) -> HttpRequest {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> HttpRequest {
        self.headers.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> HttpRequest {
        self.body = body.into();
        self
    }

    /// `a=1&b=x%20y`, in insertion order.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY_ENCODE_SET),
                    utf8_percent_encode(value, QUERY_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn url(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.uri.clone()
        } else {
            format!("{}?{}", self.uri, query)
        }
    }
}
