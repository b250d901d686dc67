// Fri Jan 16 2026 - Alex

use crate::archive::index::ordered_members;
use crate::archive::{ArchiveError, ArchiveIndex};
use crate::cache::{CacheKey, IndexCache};
use goblin::archive::Archive;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An archive on disk together with its symbol index.
#[derive(Debug, Clone)]
pub struct ArchiveFile {
    path: PathBuf,
    name: String,
    data: Arc<Vec<u8>>,
    key: CacheKey,
    index: ArchiveIndex,
}

impl ArchiveFile {
    /// Reads `path` and indexes it, consulting `cache` first.
    pub fn open<P: AsRef<Path>>(path: P, cache: &IndexCache) -> Result<Self, ArchiveError> {
        let path = path.as_ref().to_path_buf();
        let data = std::fs::read(&path).map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_bytes(path, data, cache)
    }

    pub fn from_bytes(path: PathBuf, data: Vec<u8>, cache: &IndexCache) -> Result<Self, ArchiveError> {
        let name = display_name(&path);
        let key = CacheKey::for_bytes(&data);

        let index = cache.get_or_compute(&key, || {
            log::info!("Loading {}", path.display());
            ArchiveIndex::build(&name, &data)
        })?;

        log::debug!(
            "{}: {} members, {} symbols",
            name,
            index.member_count(),
            index.symbol_count()
        );

        Ok(Self {
            path,
            name,
            data: Arc::new(data),
            key,
            index,
        })
    }

    /// Opens every archive in parallel. The result keeps the order of `paths`;
    /// the first failure in that order is returned.
    pub fn load_all<P>(paths: &[P], cache: &IndexCache) -> Result<Vec<Self>, ArchiveError>
    where
        P: AsRef<Path> + Sync,
    {
        paths
            .par_iter()
            .map(|path| Self::open(path, cache))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    /// Raw bytes of one member, exactly as stored in the archive.
    pub fn member_bytes(&self, member: &str) -> Result<&[u8], ArchiveError> {
        let archive = Archive::parse(&self.data).map_err(|e| {
            ArchiveError::parse(&self.name, format!("Failed to parse archive: {}", e))
        })?;

        // Same-named members resolve to the first one, matching the index.
        ordered_members(&self.name, &archive, &self.data)?
            .into_iter()
            .find(|(name, _)| *name == member)
            .map(|(_, bytes)| bytes)
            .ok_or_else(|| ArchiveError::MemberNotFound {
                archive: self.name.clone(),
                member: member.to_string(),
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the archive, used when reporting members.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    pub fn index(&self) -> &ArchiveIndex {
        &self.index
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
