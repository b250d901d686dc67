// Fri Jan 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Multiple non-weak definitions for symbol {symbol}: {first} and {second}")]
    MultipleDefinition {
        symbol: String,
        first: String,
        second: String,
    },
    #[error("Unresolved symbols: {}", .0.join(", "))]
    UnresolvedSymbols(Vec<String>),
}

impl ResolveError {
    /// Symbols named by this error.
    pub fn symbols(&self) -> Vec<&str> {
        match self {
            ResolveError::MultipleDefinition { symbol, .. } => vec![symbol.as_str()],
            ResolveError::UnresolvedSymbols(names) => names.iter().map(|s| s.as_str()).collect(),
        }
    }
}
