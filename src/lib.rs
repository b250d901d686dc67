// Fri Jan 16 2026 - Alex

//! Static-archive member selection.
//!
//! Given an ordered list of `ar` archives and a set of symbol names, work out
//! which object members a static link would pull in: the transitive closure of
//! undefined references, resolved first-archive first-hit, with strong/weak
//! binding rules and multiple-definition detection. Archive symbol tables are
//! memoized on disk keyed by a hash of the archive contents.

pub mod archive;
pub mod cache;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod output;
pub mod resolve;

#[cfg(test)]
mod testing;

pub use archive::{ArchiveError, ArchiveFile, ArchiveIndex, MemberSymbols};
pub use cache::{CacheKey, IndexCache};
pub use config::Config;
pub use engine::{Engine, Outcome};
pub use error::{Error, Result};
pub use extract::{ExtractError, ObjectExtractor};
pub use resolve::{MemberRef, Resolution, ResolveError, Resolver};
