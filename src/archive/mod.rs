// Fri Jan 16 2026 - Alex

pub mod error;
pub mod file;
pub mod index;
pub mod member;

pub use error::ArchiveError;
pub use file::ArchiveFile;
pub use index::{ArchiveIndex, DuplicateDefinition};
pub use member::MemberSymbols;
