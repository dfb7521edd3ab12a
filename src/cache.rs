//! Disk cache for fetched data.
//!
//! Entries are JSON files under the platform cache directory, each wrapped
//! with a storage timestamp so callers can enforce their own time-to-live.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct Entry<T> {
    stored_at: DateTime<Utc>,
    value: T,
}

/// JSON file cache with per-load expiry.
#[derive(Debug)]
pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    /// Cache under the platform cache directory.
    pub fn new() -> Result<Self> {
        let base = directories::ProjectDirs::from("fi", "gassplit", "gassplit")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine cache directory"))?;
        Self::at(base.cache_dir().to_path_buf())
    }

    /// Cache rooted at an explicit directory.
    pub fn at(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{name}.json"))
    }

    /// Load a cached value if present, readable and younger than `ttl`.
    pub fn load<T: DeserializeOwned>(&self, name: &str, ttl: Duration) -> Option<T> {
        let raw = fs::read_to_string(self.entry_path(name)).ok()?;
        let entry: Entry<T> = serde_json::from_str(&raw).ok()?;

        let age = Utc::now().signed_duration_since(entry.stored_at);
        if age > ttl {
            tracing::debug!(name = name, "Cache entry expired");
            return None;
        }
        Some(entry.value)
    }

    /// Store a value, replacing the file atomically.
    pub fn store<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let entry = Entry {
            stored_at: Utc::now(),
            value,
        };
        let json = serde_json::to_string_pretty(&entry)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(self.entry_path(name))?;
        Ok(())
    }

    /// Remove every cached entry.
    pub fn clear(&self) -> Result<()> {
        for dir_entry in fs::read_dir(&self.cache_dir)? {
            let path = dir_entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
