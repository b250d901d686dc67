// Fri Jan 16 2026 - Alex

pub mod formatter;
pub mod report;

pub use formatter::TextFormatter;
pub use report::{ObjectReport, ResolutionReport};
