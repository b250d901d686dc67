// Fri Jan 16 2026 - Alex

pub mod error;
pub mod key;
pub mod store;

pub use error::CacheError;
pub use key::{CacheKey, SCHEMA_SALT};
pub use store::IndexCache;
