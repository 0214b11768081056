use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::cache_lookup::CacheLookup;
use crate::cache::enums::delete_scope::DeleteScope;
use crate::cache::enums::error_policy::ErrorPolicy;
use crate::cache::enums::expiry_filter::ExpiryFilter;
use crate::cache::errors::CacheError;
use crate::cache::helpers::{sha1_hex, unix_timestamp};
use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::delete_policy::DeletePolicy;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::cache_garbage_collect::CacheGarbageCollect;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_PREFIX: &str = "[File]";
const FILE_EXTENSION: &str = ".cache";

impl CacheConnectorFile {
    #[tracing::instrument(level = "debug")]
    pub fn connect(
        cache_dir: &Path,
        default_expire: u64,
        ignore_on_delete: Vec<String>,
    ) -> Result<Self, CacheError> {
        if cache_dir.exists() {
            if !cache_dir.is_dir() {
                return Err(CacheError::Configuration(format!(
                    "cache_dir '{}' is not a directory",
                    cache_dir.display()
                )));
            }
        } else {
            fs::create_dir_all(cache_dir).map_err(|e| {
                CacheError::Configuration(format!(
                    "unable to create cache_dir '{}': {}",
                    cache_dir.display(),
                    e
                ))
            })?;
        }
        if fs::metadata(cache_dir)?.permissions().readonly() {
            return Err(CacheError::Configuration(format!(
                "cache_dir '{}' is not writable",
                cache_dir.display()
            )));
        }
        info!("{} Using cache directory {}", LOG_PREFIX, cache_dir.display());
        Ok(Self {
            cache_dir: cache_dir.to_path_buf(),
            default_expire,
            ignore_on_delete: Arc::new(ignore_on_delete),
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn file_name(key: &str) -> String {
        format!("{}{}", sha1_hex(key.as_bytes()), FILE_EXTENSION)
    }

    /// `<cache_dir>/<first two hex chars>/<sha1(key)>.cache`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name = Self::file_name(key);
        self.cache_dir.join(&file_name[..2]).join(file_name)
    }

    /// Lifetime `0` never expires; otherwise expired once `modified + lifetime < now`.
    pub fn is_expired(modified: SystemTime, lifetime: u64, now: u64) -> bool {
        if lifetime == 0 {
            return false;
        }
        let modified = modified
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);
        modified.saturating_add(lifetime) < now
    }

    pub fn encode(lifetime: u64, value: &[u8]) -> Vec<u8> {
        let mut data = format!("{}\n", lifetime).into_bytes();
        data.extend_from_slice(value);
        data
    }

    pub fn decode(path: &Path, contents: &[u8]) -> Result<(u64, Vec<u8>), CacheError> {
        let newline = contents
            .iter()
            .position(|byte| *byte == b'\n')
            .ok_or_else(|| CacheError::CorruptedEntry(format!("{} has no lifetime header", path.display())))?;
        let lifetime = Self::parse_lifetime(&contents[..newline])
            .ok_or_else(|| CacheError::CorruptedEntry(format!("{} has an invalid lifetime header", path.display())))?;
        Ok((lifetime, contents[newline + 1..].to_vec()))
    }

    fn parse_lifetime(header: &[u8]) -> Option<u64> {
        std::str::from_utf8(header).ok()?.trim().parse::<u64>().ok()
    }

    /// Lifetime from the first line only; `None` when the header is missing or unreadable.
    fn read_lifetime(path: &Path) -> Option<u64> {
        let file = fs::File::open(path).ok()?;
        let mut header = String::new();
        BufReader::new(file).read_line(&mut header).ok()?;
        if !header.ends_with('\n') {
            return None;
        }
        Self::parse_lifetime(header.as_bytes())
    }

    /// Single deletion routine behind `delete`, `clear` and `garbage_collect`.
    /// Returns the number of files removed; a file that is already gone counts as not removed.
    pub fn delete_path(
        path: &Path,
        policy: &DeletePolicy,
        ignore_on_delete: &[String],
        now: u64,
    ) -> Result<u64, CacheError> {
        match policy.scope {
            DeleteScope::File => Self::delete_file(path, policy, now),
            DeleteScope::Tree => Self::delete_tree(path, policy, ignore_on_delete, now),
        }
    }

    fn delete_file(path: &Path, policy: &DeletePolicy, now: u64) -> Result<u64, CacheError> {
        if policy.expiry == ExpiryFilter::ExpiredOnly {
            let modified = match fs::metadata(path).and_then(|metadata| metadata.modified()) {
                Ok(modified) => modified,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
                Err(e) => return Self::on_error(policy, path, e),
            };
            // Unreadable headers count as expired.
            let expired = match Self::read_lifetime(path) {
                Some(lifetime) => Self::is_expired(modified, lifetime, now),
                None => true,
            };
            if !expired {
                return Ok(0);
            }
        }
        match fs::remove_file(path) {
            Ok(()) => Ok(1),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Self::on_error(policy, path, e),
        }
    }

    fn delete_tree(
        path: &Path,
        policy: &DeletePolicy,
        ignore_on_delete: &[String],
        now: u64,
    ) -> Result<u64, CacheError> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Self::on_error(policy, path, e),
        };
        let mut removed = 0u64;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    Self::on_error(policy, path, e)?;
                    continue;
                }
            };
            let name = entry.file_name();
            if ignore_on_delete.iter().any(|ignored| name.to_string_lossy() == ignored.as_str()) {
                continue;
            }
            let child = entry.path();
            if child.is_dir() {
                removed += Self::delete_tree(&child, policy, ignore_on_delete, now)?;
                // Only emptied directories are removed.
                if fs::read_dir(&child).map(|mut rest| rest.next().is_none()).unwrap_or(false)
                    && let Err(e) = fs::remove_dir(&child)
                    && e.kind() != ErrorKind::NotFound
                {
                    Self::on_error(policy, &child, e)?;
                }
            } else {
                removed += Self::delete_file(&child, policy, now)?;
            }
        }
        Ok(removed)
    }

    fn on_error(policy: &DeletePolicy, path: &Path, error: std::io::Error) -> Result<u64, CacheError> {
        match policy.on_error {
            ErrorPolicy::Abort => Err(CacheError::Io(error)),
            ErrorPolicy::Continue => {
                warn!("{} Unable to delete {}: {}", LOG_PREFIX, path.display(), error);
                Ok(0)
            }
        }
    }

    async fn remove(&self, path: PathBuf, policy: DeletePolicy) -> Result<u64, CacheError> {
        let ignore_on_delete = self.ignore_on_delete.clone();
        let now = unix_timestamp();
        tokio::task::spawn_blocking(move || Self::delete_path(&path, &policy, &ignore_on_delete, now))
            .await
            .map_err(|e| CacheError::Io(std::io::Error::other(e)))?
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorFile {
    fn driver(&self) -> CacheDriver {
        CacheDriver::file
    }

    async fn ping(&self) -> Result<(), CacheError> {
        match tokio::fs::metadata(&self.cache_dir).await {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(CacheError::ConnectionError(format!(
                "{} is not a directory",
                self.cache_dir.display()
            ))),
            Err(e) => Err(CacheError::ConnectionError(format!(
                "{} is not accessible: {}",
                self.cache_dir.display(),
                e
            ))),
        }
    }

    /// Refused: a file can disappear between the check and the read.
    async fn has(&self, _key: &str) -> Result<bool, CacheError> {
        Err(CacheError::unsupported(CacheDriver::file, "has()"))
    }

    async fn get(&self, key: &str) -> Result<CacheLookup<Vec<u8>>, CacheError> {
        let path = self.path_for(key);
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CacheLookup::Miss),
            Err(e) => return Err(CacheError::Io(e)),
        };
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CacheLookup::Miss),
            Err(e) => return Err(CacheError::Io(e)),
        };
        let (lifetime, payload) = Self::decode(&path, &contents)?;
        if Self::is_expired(metadata.modified()?, lifetime, unix_timestamp()) {
            debug!("{} Removing expired {}", LOG_PREFIX, path.display());
            self.remove(path, DeletePolicy::single_file()).await?;
            return Ok(CacheLookup::Miss);
        }
        Ok(CacheLookup::Hit(payload))
    }

    async fn set(&self, key: &str, value: &[u8], lifetime: Option<u64>) -> Result<bool, CacheError> {
        let lifetime = lifetime.unwrap_or(self.default_expire);
        let path = self.path_for(key);
        if let Some(directory) = path.parent() {
            tokio::fs::create_dir_all(directory).await?;
        }
        tokio::fs::write(&path, Self::encode(lifetime, value)).await?;
        debug!("{} Stored {} (lifetime {}s)", LOG_PREFIX, path.display(), lifetime);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let removed = self.remove(self.path_for(key), DeletePolicy::single_file()).await?;
        Ok(removed > 0)
    }

    async fn clear(&self) -> Result<bool, CacheError> {
        let removed = self.remove(self.cache_dir.clone(), DeletePolicy::purge()).await?;
        info!("{} Cleared {} files from {}", LOG_PREFIX, removed, self.cache_dir.display());
        Ok(true)
    }

    fn as_garbage_collect(&self) -> Option<&dyn CacheGarbageCollect> {
        Some(self)
    }
}

#[async_trait]
impl CacheGarbageCollect for CacheConnectorFile {
    async fn garbage_collect(&self) -> Result<(), CacheError> {
        let removed = self.remove(self.cache_dir.clone(), DeletePolicy::sweep_expired()).await?;
        info!("{} Garbage collection removed {} expired files", LOG_PREFIX, removed);
        Ok(())
    }
}
