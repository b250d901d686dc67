// Fri Jan 16 2026 - Alex

use crate::cache::{CacheError, CacheKey};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Serialize, Deserialize)]
struct CacheRecord<T> {
    key: CacheKey,
    payload: T,
}

/// Persistent, content-addressed memoization of archive indexes.
///
/// The cache never changes a result. Missing, foreign or corrupt entries are
/// recomputed, and failures to store are only logged.
#[derive(Debug, Clone)]
pub struct IndexCache {
    dir: Option<PathBuf>,
}

impl IndexCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// A cache that always misses and never writes.
    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn entry_path(&self, key: &CacheKey) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(key.file_name()))
    }

    pub fn get_or_compute<T, E, F>(&self, key: &CacheKey, compute: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T, E>,
    {
        let path = match self.entry_path(key) {
            Some(path) => path,
            None => return compute(),
        };

        match Self::load(&path, key) {
            Ok(payload) => {
                log::debug!("Cache hit {}", path.display());
                return Ok(payload);
            }
            Err(CacheError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::debug!("Cache miss {}: {}", path.display(), e),
        }

        let payload = compute()?;

        if let Err(e) = Self::store(&path, key, &payload) {
            log::warn!("Failed to cache {}: {}", path.display(), e);
        }

        Ok(payload)
    }

    fn load<T: DeserializeOwned>(path: &Path, key: &CacheKey) -> Result<T, CacheError> {
        let reader = BufReader::new(File::open(path)?);
        let record: CacheRecord<T> = serde_json::from_reader(reader)?;

        if record.key != *key {
            return Err(CacheError::KeyMismatch {
                expected: key.to_string(),
                found: record.key.to_string(),
            });
        }

        Ok(record.payload)
    }

    fn store<T: Serialize>(path: &Path, key: &CacheKey, payload: &T) -> Result<(), CacheError> {
        let dir = match path.parent() {
            Some(dir) => dir,
            None => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // Readers only ever see complete records: write aside, then rename.
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(&mut writer, &CacheRecord { key: key.clone(), payload })?;
            writer.flush()?;
        }
        tmp.persist(path)?;

        Ok(())
    }

    /// Removes every cache entry. Returns how many files were deleted.
    pub fn clear(&self) -> std::io::Result<usize> {
        let dir = match &self.dir {
            Some(dir) if dir.exists() => dir,
            _ => return Ok(0),
        };

        let mut removed = 0;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_entry = entry
                .file_name()
                .to_str()
                .map(|name| name.starts_with("ar_"))
                .unwrap_or(false);
            if is_entry && entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}
