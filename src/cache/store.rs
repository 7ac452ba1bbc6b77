// Cache store for reading and writing cached API data.
// Handles JSON serialization, TTL checking, and lazy eviction on read.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

use super::paths::{self, Kind};

/// How long a cached entry stays valid: 30 minutes.
pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Source of the current time, injectable for tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One cached entry as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    /// Write time in epoch milliseconds.
    timestamp: i64,
    /// The cached payload; `null` is a legitimate stored value.
    data: Value,
}

/// Expiring key/value store keyed by (subject, kind).
///
/// One JSON file per entry, so two subjects never collide and never share
/// TTL clocks. Expired entries are deleted lazily on the read that finds
/// them stale.
pub struct CacheStore {
    root: PathBuf,
    ttl: Duration,
    clock: Box<dyn Clock>,
}

impl CacheStore {
    /// Create a store rooted at the user cache directory.
    pub fn open() -> Result<Self> {
        let root = paths::cache_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user cache directory"))?;
        Ok(Self::at(root))
    }

    /// Create a store rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ttl: CACHE_TTL,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for timestamps and expiry checks.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Override the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Store `data` for (subject, kind), unconditionally overwriting any
    /// previous entry and resetting its TTL clock.
    pub fn set(&self, subject: &str, kind: Kind, data: &Value) -> Result<()> {
        let path = paths::entry_path(&self.root, subject, kind);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entry = CacheEntry {
            timestamp: self.clock.now().timestamp_millis(),
            data: data.clone(),
        };
        let json = serde_json::to_string(&entry)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Read the entry for (subject, kind).
    ///
    /// Returns `None` when no entry exists or the entry has outlived the
    /// TTL; a stale entry is deleted on the way out. A stored `null` is a
    /// valid hit and comes back as `Some(Value::Null)`.
    pub fn get(&self, subject: &str, kind: Kind) -> Result<Option<Value>> {
        let path = paths::entry_path(&self.root, subject, kind);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let entry: CacheEntry = serde_json::from_str(&contents)?;

        let age = self.clock.now().timestamp_millis() - entry.timestamp;
        if age >= self.ttl.as_millis() as i64 {
            fs::remove_file(&path)?;
            return Ok(None);
        }

        Ok(Some(entry.data))
    }

    /// Remove the entry for (subject, kind), if present.
    pub fn evict(&self, subject: &str, kind: Kind) -> Result<()> {
        let path = paths::entry_path(&self.root, subject, kind);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}
