// Fri Jan 16 2026 - Alex

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Linkage-visible symbols of one relocatable object.
///
/// `def` and `undef` are disjoint. `weak` holds names from either set that
/// carry weak binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSymbols {
    pub def: IndexSet<String>,
    pub undef: IndexSet<String>,
    pub weak: IndexSet<String>,
}

impl MemberSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_def(mut self, name: &str) -> Self {
        self.add_def(name, false);
        self
    }

    pub fn with_weak_def(mut self, name: &str) -> Self {
        self.add_def(name, true);
        self
    }

    pub fn with_undef(mut self, name: &str) -> Self {
        self.add_undef(name, false);
        self
    }

    pub fn with_weak_undef(mut self, name: &str) -> Self {
        self.add_undef(name, true);
        self
    }

    pub fn add_def(&mut self, name: &str, weak: bool) {
        // A definition in the same object satisfies any earlier reference.
        self.undef.shift_remove(name);
        self.weak.shift_remove(name);
        self.def.insert(name.to_string());
        if weak {
            self.weak.insert(name.to_string());
        }
    }

    pub fn add_undef(&mut self, name: &str, weak: bool) {
        if self.def.contains(name) {
            return;
        }
        self.undef.insert(name.to_string());
        if weak {
            self.weak.insert(name.to_string());
        }
    }

    pub fn is_weak(&self, name: &str) -> bool {
        self.weak.contains(name)
    }

    /// Undefined references that must be satisfied for this object to link.
    pub fn required(&self) -> impl Iterator<Item = &String> {
        self.undef.iter().filter(move |name| !self.weak.contains(*name))
    }

    pub fn is_empty(&self) -> bool {
        self.def.is_empty() && self.undef.is_empty()
    }
}
