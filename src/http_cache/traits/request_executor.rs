use crate::cache::errors::CacheError;
use crate::http_cache::structs::http_request::HttpRequest;
use crate::http_cache::structs::http_response::HttpResponse;
use async_trait::async_trait;

#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, CacheError>;
}
