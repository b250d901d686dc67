// Fri Jan 16 2026 - Alex

pub mod error;

pub use error::ExtractError;

use crate::archive::ArchiveFile;
use crate::resolve::MemberRef;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Copies resolved members out of their archives, byte for byte.
///
/// Each file is written under a temporary name in the destination directory
/// and renamed into place, so a failed write leaves nothing behind.
pub struct ObjectExtractor {
    output_dir: PathBuf,
}

impl ObjectExtractor {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Per-architecture runtime layout: `runtime/libgcc-<arch>`.
    pub fn for_arch(arch: &str) -> Self {
        Self::new(Path::new("runtime").join(format!("libgcc-{}", arch)))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn extract_all(
        &self,
        archives: &[ArchiveFile],
        objects: &[MemberRef],
    ) -> Result<Vec<PathBuf>, ExtractError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExtractError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        objects
            .iter()
            .map(|object| {
                let archive = archives
                    .get(object.archive)
                    .ok_or(ExtractError::UnknownArchive(object.archive))?;
                self.extract(archive, &object.member)
            })
            .collect()
    }

    pub fn extract(&self, archive: &ArchiveFile, member: &str) -> Result<PathBuf, ExtractError> {
        if !is_safe_name(member) {
            return Err(ExtractError::UnsafeName(member.to_string()));
        }

        let bytes = archive.member_bytes(member)?;
        let path = self.output_dir.join(member);
        write_atomic(&self.output_dir, &path, bytes)?;

        log::debug!("Extracted {}({}) to {}", archive.name(), member, path.display());
        Ok(path)
    }
}

fn is_safe_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), ExtractError> {
    let io_err = |source: std::io::Error| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
