// Fri Jan 16 2026 - Alex

use crate::archive::ArchiveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Refusing to extract member with unsafe name: {0}")]
    UnsafeName(String),
    #[error("Unknown archive #{0}")]
    UnknownArchive(usize),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}
