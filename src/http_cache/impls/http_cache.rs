use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::helpers::sha1_hex;
use crate::cache::structs::cache::Cache;
use crate::cache::structs::cache_registry::CacheRegistry;
use crate::config::structs::http_cache_config::HttpCacheConfig;
use crate::http_cache::enums::cache_status::CacheStatus;
use crate::http_cache::helpers::{CACHE_HITS_HEADER, CACHE_STATUS_HEADER, parse_http_date};
use crate::http_cache::structs::cache_control::CacheControl;
use crate::http_cache::structs::http_cache::{HttpCache, KeyGenerator};
use crate::http_cache::structs::http_request::HttpRequest;
use crate::http_cache::structs::http_response::HttpResponse;
use crate::http_cache::structs::response_timing::ResponseTiming;
use crate::http_cache::structs::stored_response::StoredResponse;
use crate::http_cache::traits::request_executor::RequestExecutor;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

const LOG_PREFIX: &str = "[HTTP Cache]";

impl fmt::Debug for HttpCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCache")
            .field("cache", &self.cache)
            .field("allow_private_cache", &self.allow_private_cache)
            .field("key_generator", &self.key_generator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl HttpCache {
    pub fn new(cache: Option<Arc<Cache>>, allow_private_cache: bool) -> HttpCache {
        HttpCache {
            cache,
            allow_private_cache,
            key_generator: None,
        }
    }

    /// Disabled adaptors get no cache and pass every request through.
    pub async fn from_config(registry: &CacheRegistry, config: &HttpCacheConfig) -> Result<HttpCache, CacheError> {
        if !config.enabled {
            return Ok(Self::new(None, config.allow_private_cache));
        }
        let cache = registry.instance(config.group.as_deref()).await?;
        Ok(Self::new(Some(cache), config.allow_private_cache))
    }

    pub fn with_key_generator<F>(mut self, generator: F) -> HttpCache
    where
        F: Fn(&HttpRequest) -> String + Send + Sync + 'static,
    {
        let generator: KeyGenerator = Arc::new(generator);
        self.key_generator = Some(generator);
        self
    }

    pub fn cache(&self) -> Option<&Arc<Cache>> {
        self.cache.as_ref()
    }

    /// `sha1(uri?query~header values~body)`.
    pub fn basic_cache_key(request: &HttpRequest) -> String {
        let headers = request.headers.values().collect::<Vec<_>>().join("~");
        let mut material = format!("{}?{}~{}~", request.uri, request.query_string(), headers).into_bytes();
        material.extend_from_slice(&request.body);
        sha1_hex(&material)
    }

    pub fn create_cache_key(&self, request: &HttpRequest) -> String {
        match &self.key_generator {
            Some(generator) => generator(request),
            None => Self::basic_cache_key(request),
        }
    }

    pub fn hits_key(key: &str) -> String {
        format!("{}{}", CACHE_HITS_HEADER, key)
    }

    pub async fn execute(
        &self,
        request: &HttpRequest,
        executor: &dyn RequestExecutor,
    ) -> Result<HttpResponse, CacheError> {
        let Some(cache) = self.cache.as_deref() else {
            return executor.execute(request).await;
        };
        let key = self.create_cache_key(request);

        if request.method.is_destructive() {
            if let Err(e) = self.invalidate_cache(&key).await {
                warn!("{} Unable to invalidate {}: {}", LOG_PREFIX, key, e);
            }
            let mut response = executor.execute(request).await?;
            response.headers.insert("cache-control", "no-cache, must-revalidate");
            return Ok(response);
        }

        let bypass = request
            .headers
            .get("pragma")
            .is_some_and(|pragma| pragma.to_ascii_lowercase().contains("no-cache"));

        if !bypass {
            match cache.get::<StoredResponse>(&key).await {
                Ok(CacheLookup::Hit(stored)) => {
                    let remaining = stored.remaining(Utc::now());
                    let mut response = stored.response;
                    let hits = match Self::count_hit(cache, &key, remaining).await {
                        Ok(hits) => hits,
                        Err(e) => {
                            warn!("{} Unable to count hit for {}: {}", LOG_PREFIX, key, e);
                            0
                        }
                    };
                    debug!("{} HIT {} ({} hits)", LOG_PREFIX, request.uri, hits);
                    response.headers.insert(CACHE_STATUS_HEADER, &CacheStatus::HIT.to_string());
                    response.headers.insert(CACHE_HITS_HEADER, &hits.to_string());
                    return Ok(response);
                }
                Ok(CacheLookup::Miss) => {}
                Err(e) => warn!("{} Lookup of {} failed: {}", LOG_PREFIX, key, e),
            }
        }

        let request_time = Utc::now();
        let mut response = executor.execute(request).await?;
        let timing = ResponseTiming::new(request_time, Utc::now());

        let stored = if bypass {
            false
        } else {
            match self.set_cache(&key, &response, &timing, Utc::now()).await {
                Ok(stored) => stored,
                Err(e) => {
                    warn!("{} Unable to store {}: {}", LOG_PREFIX, key, e);
                    false
                }
            }
        };
        let status = if stored { CacheStatus::SAVED } else { CacheStatus::MISS };
        debug!("{} {} {}", LOG_PREFIX, status, request.uri);
        response.headers.insert(CACHE_STATUS_HEADER, &status.to_string());
        Ok(response)
    }

    /// Removes the stored response and its hit counter.
    pub async fn invalidate_cache(&self, key: &str) -> Result<bool, CacheError> {
        let Some(cache) = self.cache.as_deref() else {
            return Ok(false);
        };
        let hits_key = Self::hits_key(key);
        cache.delete_multiple(&[key, hits_key.as_str()]).await
    }

    /// Stores `response` under `key` when it is cacheable; returns whether it was stored.
    pub async fn set_cache(
        &self,
        key: &str,
        response: &HttpResponse,
        timing: &ResponseTiming,
        now: DateTime<Utc>,
    ) -> Result<bool, CacheError> {
        let Some(cache) = self.cache.as_deref() else {
            return Ok(false);
        };
        let Some(lifetime) = self.cache_lifetime(response, timing, now) else {
            return Ok(false);
        };
        cache.set(&Self::hits_key(key), &0i64, Some(lifetime)).await?;
        let stored = StoredResponse::new(response.clone(), lifetime, now);
        cache.set(key, &stored, Some(lifetime)).await
    }

    /// `remaining` is the response's own lifetime left, reused when the counter is rewritten.
    async fn count_hit(cache: &Cache, key: &str, remaining: u64) -> Result<i64, CacheError> {
        let hits_key = Self::hits_key(key);
        if cache.backend().as_arithmetic().is_some()
            && let Some(hits) = cache.increment(&hits_key, 1).await?
        {
            return Ok(hits);
        }
        let hits = cache.get::<i64>(&hits_key).await?.unwrap_or(0) + 1;
        cache.set(&hits_key, &hits, Some(remaining)).await?;
        Ok(hits)
    }

    /// Seconds the response may be stored, or `None` when it must not be cached.
    pub fn cache_lifetime(
        &self,
        response: &HttpResponse,
        timing: &ResponseTiming,
        now: DateTime<Utc>,
    ) -> Option<u64> {
        let control = CacheControl::parse(response.headers.get("cache-control").unwrap_or_default());
        if control.has("no-cache") || control.has("no-store") {
            return None;
        }
        let private = control.has("private");
        let s_maxage = control.seconds("s-maxage");
        if private && !self.allow_private_cache && s_maxage.is_none() {
            return None;
        }

        let date = response.headers.get("date").and_then(parse_http_date);
        let execution = timing.execution_seconds();
        let apparent_age = match date {
            Some(date) => (timing.response_time - date).num_seconds().max(0),
            None => execution,
        };
        let age = response
            .headers
            .get("age")
            .and_then(|age| age.trim().parse::<i64>().ok())
            .unwrap_or(0)
            .max(0);
        let corrected_initial_age = apparent_age.max(age).saturating_add(execution);
        let resident_time = (now - timing.response_time).num_seconds().max(0);
        let current_age = corrected_initial_age.saturating_add(resident_time);

        let mut ttl = control.seconds("max-age");
        if private && s_maxage.is_some() {
            ttl = s_maxage;
        }
        if ttl.is_some_and(|ttl| ttl < 1) {
            return None;
        }
        if let Some(max_stale) = control.seconds("max-stale")
            && !control.has("must-revalidate")
        {
            ttl = Some(current_age.saturating_add(max_stale));
        }

        let lifetime = match ttl {
            Some(ttl) => ttl,
            None => {
                let expires = parse_http_date(response.headers.get("expires")?)?;
                let freshness = (expires - date.unwrap_or(timing.response_time)).num_seconds();
                freshness.saturating_sub(current_age)
            }
        };

        if lifetime < 1 {
            return None;
        }
        u64::try_from(lifetime).ok()
    }
}
