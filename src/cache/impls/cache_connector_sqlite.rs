use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::errors::CacheError;
use crate::cache::helpers::{ensure_tags, unix_timestamp};
use crate::cache::structs::cache_connector_sqlite::CacheConnectorSqlite;
use crate::cache::structs::cache_item::CacheItem;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::cache_garbage_collect::CacheGarbageCollect;
use crate::cache::traits::cache_tagging::CacheTagging;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite, Transaction};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

const LOG_PREFIX: &str = "[SQLite]";

pub const MEMORY_DATABASE: &str = ":memory:";
pub const DEFAULT_SCHEMA: &str = "CREATE TABLE caches (id TEXT PRIMARY KEY NOT NULL, cache BLOB, expiration INTEGER NOT NULL DEFAULT 0, tags TEXT)";

impl CacheConnectorSqlite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(database: &str, max_connections: u32) -> Result<Pool<Sqlite>, Error> {
        if database == MEMORY_DATABASE {
            // Every connection to `:memory:` is a separate database, so keep exactly one alive.
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?
                .log_statements(log::LevelFilter::Debug);
            return SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await;
        }
        let options = SqliteConnectOptions::new()
            .filename(database)
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn connect(
        database: &str,
        schema: Option<&str>,
        default_expire: u64,
        max_connections: Option<u32>,
    ) -> Result<Self, CacheError> {
        let pool = Self::create(database, max_connections.unwrap_or(5))
            .await
            .map_err(|e| {
                CacheError::ConnectionError(format!("Unable to open SQLite database {}: {}", database, e))
            })?;
        Self::initialize(&pool, schema.unwrap_or(DEFAULT_SCHEMA)).await?;
        info!("{} Using cache database {}", LOG_PREFIX, database);
        Ok(Self { pool, default_expire })
    }

    async fn initialize(pool: &Pool<Sqlite>, schema: &str) -> Result<(), CacheError> {
        let existing = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'caches'")
            .fetch_optional(pool)
            .await?;
        if existing.is_none() {
            info!("{} Creating table caches", LOG_PREFIX);
            sqlx::query(schema).execute(pool).await?;
        }
        Ok(())
    }

    /// Absolute expiry stored in the `expiration` column; `0` never expires.
    pub fn expiration(lifetime: u64, now: u64) -> i64 {
        if lifetime == 0 {
            0
        } else {
            i64::try_from(now.saturating_add(lifetime)).unwrap_or(i64::MAX)
        }
    }

    pub fn is_expired(expiration: i64, now: u64) -> bool {
        expiration != 0 && expiration <= now as i64
    }

    /// `<tag1>,<tag2>`; `None` when there are no tags.
    pub fn encode_tags(tags: &[String]) -> Option<String> {
        if tags.is_empty() {
            None
        } else {
            Some(format!("<{}>", tags.join(">,<")))
        }
    }

    fn tag_pattern(tag: &str) -> String {
        let escaped = tag.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        format!("%<{}>%", escaped)
    }

    async fn upsert(
        transaction: &mut Transaction<'_, Sqlite>,
        key: &str,
        value: &[u8],
        expiration: i64,
        tags: Option<&str>,
    ) -> Result<(), Error> {
        let existing = sqlx::query("SELECT id FROM caches WHERE id = ?")
            .bind(key)
            .fetch_optional(&mut **transaction)
            .await?;
        if existing.is_some() {
            sqlx::query("UPDATE caches SET cache = ?, expiration = ?, tags = ? WHERE id = ?")
                .bind(value)
                .bind(expiration)
                .bind(tags)
                .bind(key)
                .execute(&mut **transaction)
                .await?;
        } else {
            sqlx::query("INSERT INTO caches (id, cache, expiration, tags) VALUES (?, ?, ?, ?)")
                .bind(key)
                .bind(value)
                .bind(expiration)
                .bind(tags)
                .execute(&mut **transaction)
                .await?;
        }
        Ok(())
    }

    async fn store(
        &self,
        key: &str,
        value: &[u8],
        tags: Option<&str>,
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError> {
        let expiration = Self::expiration(lifetime.unwrap_or(self.default_expire), unix_timestamp());
        let mut transaction = self.pool.begin().await?;
        Self::upsert(&mut transaction, key, value, expiration, tags).await?;
        transaction.commit().await?;
        debug!("{} Stored {} (expiration {})", LOG_PREFIX, key, expiration);
        Ok(true)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorSqlite {
    fn driver(&self) -> CacheDriver {
        CacheDriver::sqlite
    }

    async fn ping(&self) -> Result<(), CacheError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn has(&self, key: &str) -> Result<bool, CacheError> {
        let row = sqlx::query("SELECT id FROM caches WHERE id = ? AND (expiration = 0 OR expiration > ?)")
            .bind(key)
            .bind(unix_timestamp() as i64)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn get(&self, key: &str) -> Result<CacheLookup<Vec<u8>>, CacheError> {
        let row = sqlx::query("SELECT cache, expiration FROM caches WHERE id = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(CacheLookup::Miss);
        };
        let expiration: i64 = row.try_get("expiration")?;
        if Self::is_expired(expiration, unix_timestamp()) {
            debug!("{} Removing expired {}", LOG_PREFIX, key);
            self.delete(key).await?;
            return Ok(CacheLookup::Miss);
        }
        let cache: Option<Vec<u8>> = row.try_get("cache")?;
        Ok(CacheLookup::Hit(cache.unwrap_or_default()))
    }

    async fn set(&self, key: &str, value: &[u8], lifetime: Option<u64>) -> Result<bool, CacheError> {
        self.store(key, value, None, lifetime).await
    }

    async fn set_multiple(&self, items: &[CacheItem]) -> Result<bool, CacheError> {
        if items.is_empty() {
            return Ok(true);
        }
        let now = unix_timestamp();
        let mut transaction = self.pool.begin().await?;
        for item in items {
            let expiration = Self::expiration(item.lifetime.unwrap_or(self.default_expire), now);
            Self::upsert(&mut transaction, &item.key, &item.value, expiration, None).await?;
        }
        transaction.commit().await?;
        debug!("{} Batch set {} items", LOG_PREFIX, items.len());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let result = sqlx::query("DELETE FROM caches WHERE id = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_multiple(&self, keys: &[String]) -> Result<bool, CacheError> {
        if keys.is_empty() {
            return Ok(true);
        }
        let placeholders = vec!["?"; keys.len()].join(", ");
        let statement = format!("DELETE FROM caches WHERE id IN ({})", placeholders);
        let mut query = sqlx::query(&statement);
        for key in keys {
            query = query.bind(key);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected() == keys.len() as u64)
    }

    async fn clear(&self) -> Result<bool, CacheError> {
        let result = sqlx::query("DELETE FROM caches").execute(&self.pool).await?;
        info!("{} Cleared {} rows", LOG_PREFIX, result.rows_affected());
        Ok(true)
    }

    fn as_tagging(&self) -> Option<&dyn CacheTagging> {
        Some(self)
    }

    fn as_garbage_collect(&self) -> Option<&dyn CacheGarbageCollect> {
        Some(self)
    }
}

#[async_trait]
impl CacheTagging for CacheConnectorSqlite {
    async fn set_with_tags(
        &self,
        key: &str,
        value: &[u8],
        tags: &[String],
        lifetime: Option<u64>,
    ) -> Result<bool, CacheError> {
        ensure_tags(tags)?;
        let encoded = Self::encode_tags(tags);
        self.store(key, value, encoded.as_deref(), lifetime).await
    }

    async fn delete_tag(&self, tag: &str) -> Result<bool, CacheError> {
        ensure_tags(&[tag.to_string()])?;
        let result = sqlx::query("DELETE FROM caches WHERE tags LIKE ? ESCAPE '\\'")
            .bind(Self::tag_pattern(tag))
            .execute(&self.pool)
            .await?;
        debug!("{} Deleted tag {} ({} rows)", LOG_PREFIX, tag, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, tag: &str) -> Result<BTreeMap<String, CacheLookup<Vec<u8>>>, CacheError> {
        ensure_tags(&[tag.to_string()])?;
        let rows = sqlx::query("SELECT id, cache, expiration FROM caches WHERE tags LIKE ? ESCAPE '\\'")
            .bind(Self::tag_pattern(tag))
            .fetch_all(&self.pool)
            .await?;
        let now = unix_timestamp();
        let mut found = BTreeMap::new();
        for row in rows {
            let expiration: i64 = row.try_get("expiration")?;
            if Self::is_expired(expiration, now) {
                continue;
            }
            let id: String = row.try_get("id")?;
            let cache: Option<Vec<u8>> = row.try_get("cache")?;
            found.insert(id, CacheLookup::Hit(cache.unwrap_or_default()));
        }
        Ok(found)
    }
}

#[async_trait]
impl CacheGarbageCollect for CacheConnectorSqlite {
    async fn garbage_collect(&self) -> Result<(), CacheError> {
        let result = sqlx::query("DELETE FROM caches WHERE expiration < ? AND expiration != 0")
            .bind(unix_timestamp() as i64)
            .execute(&self.pool)
            .await?;
        info!("{} Garbage collection removed {} expired rows", LOG_PREFIX, result.rows_affected());
        Ok(())
    }
}
