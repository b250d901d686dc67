// Fri Jan 16 2026 - Alex

pub mod engine;
pub mod error;
pub mod state;

pub use engine::{Resolution, Resolver};
pub use error::ResolveError;
pub use state::{MemberRef, Provider, ResolutionState};
