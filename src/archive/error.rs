// Fri Jan 16 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {archive}: {message}")]
    Parse { archive: String, message: String },
    #[error("Member not found in {archive}: {member}")]
    MemberNotFound { archive: String, member: String },
}

impl ArchiveError {
    pub fn parse(archive: &str, message: impl Into<String>) -> Self {
        ArchiveError::Parse {
            archive: archive.to_string(),
            message: message.into(),
        }
    }
}
