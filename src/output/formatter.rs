// Fri Jan 16 2026 - Alex

use crate::resolve::{Resolution, Resolver};
use std::fmt::Write;

/// Plain listing: one `archive:member` line per object, in resolution order.
/// Verbose mode adds the member's `def:` and `req:` symbols.
pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn format(&self, resolver: &Resolver<'_>, resolution: &Resolution) -> String {
        let mut out = String::new();

        for object in &resolution.objects {
            let archive = resolver.archive_name(object.archive).unwrap_or("?");
            let _ = writeln!(out, "{}:{}", archive, object.member);

            if !self.verbose {
                continue;
            }
            if let Some(symbols) = resolver.member_symbols(object) {
                let def: Vec<&str> = symbols.def.iter().map(|s| s.as_str()).collect();
                let req: Vec<&str> = symbols.undef.iter().map(|s| s.as_str()).collect();
                let _ = writeln!(out, "  def: {}", def.join(","));
                let _ = writeln!(out, "  req: {}", req.join(","));
            }
        }

        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
