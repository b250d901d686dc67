// Fri Jan 16 2026 - Alex

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Mixed into every key. Change it whenever the cached index layout changes.
pub const SCHEMA_SALT: [u8; 16] = [
    0x45, 0x15, 0x5d, 0xb4, 0xbc, 0x86, 0x8f, 0xa7, 0x8c, 0xb9, 0x9c, 0x34, 0x48, 0xb2, 0xbf, 0x2b,
];

/// Length of the key prefix used as a file name.
pub const FILE_KEY_LEN: usize = 24;

const FILE_PREFIX: &str = "ar_";

/// SHA-256 of an archive's bytes followed by [`SCHEMA_SALT`], hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_bytes(data: &[u8]) -> Self {
        Self::with_salt(data, &SCHEMA_SALT)
    }

    pub fn with_salt(data: &[u8], salt: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.update(salt);
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> String {
        format!("{}{}", FILE_PREFIX, &self.0[..FILE_KEY_LEN])
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
