use crate::cache::errors::CacheError;
use crate::http_cache::enums::http_method::HttpMethod;
use crate::http_cache::structs::http_request::HttpRequest;
use crate::http_cache::structs::http_response::HttpResponse;
use crate::http_cache::structs::reqwest_executor::ReqwestExecutor;
use crate::http_cache::traits::request_executor::RequestExecutor;
use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use std::time::Duration;

impl ReqwestExecutor {
    pub fn new(request_timeout: u64) -> Result<ReqwestExecutor, CacheError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .map_err(|e| CacheError::Request(format!("Failed to build HTTP client: {}", e)))?;
        Ok(ReqwestExecutor { client })
    }

    pub fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::GET => Method::GET,
            HttpMethod::HEAD => Method::HEAD,
            HttpMethod::POST => Method::POST,
            HttpMethod::PUT => Method::PUT,
            HttpMethod::PATCH => Method::PATCH,
            HttpMethod::DELETE => Method::DELETE,
            HttpMethod::OPTIONS => Method::OPTIONS,
        }
    }
}

#[async_trait]
impl RequestExecutor for ReqwestExecutor {
    #[tracing::instrument(level = "debug", skip(self, request), fields(uri = %request.uri))]
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CacheError> {
        let mut builder = self.client.request(Self::method(request.method), request.url());
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }
        let upstream = builder
            .send()
            .await
            .map_err(|e| CacheError::Request(format!("{} {} failed: {}", request.method, request.uri, e)))?;

        let mut response = HttpResponse::new(upstream.status().as_u16());
        for (name, value) in upstream.headers() {
            if let Ok(value) = value.to_str() {
                response.headers.append(name.as_str(), value);
            }
        }
        response.body = upstream
            .bytes()
            .await
            .map_err(|e| CacheError::Request(format!("Reading body of {} failed: {}", request.uri, e)))?
            .to_vec();
        debug!("[HTTP Cache] {} {} -> {}", request.method, request.uri, response.status);
        Ok(response)
    }
}
