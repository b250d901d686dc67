// Fri Jan 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// One object inside one of the archives handed to the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberRef {
    /// Position of the archive in the search order.
    pub archive: usize,
    pub member: String,
}

impl MemberRef {
    pub fn new(archive: usize, member: &str) -> Self {
        Self {
            archive,
            member: member.to_string(),
        }
    }
}

impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.archive, self.member)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub member: MemberRef,
    pub weak: bool,
}

/// Mutable state of a single resolution run.
///
/// `pending` is a FIFO: symbols are taken from the front and pushed to the
/// back, so objects are discovered breadth-first.
#[derive(Debug, Default)]
pub struct ResolutionState {
    pub provided: HashMap<String, Provider>,
    pub resolved: Vec<MemberRef>,
    pub unresolved: BTreeSet<String>,
    pub pending: VecDeque<String>,
    resolved_set: HashSet<MemberRef>,
}

impl ResolutionState {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn next_symbol(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    pub fn is_provided(&self, symbol: &str) -> bool {
        self.provided.contains_key(symbol)
    }

    pub fn is_resolved(&self, member: &MemberRef) -> bool {
        self.resolved_set.contains(member)
    }

    /// Appends `member` to the resolved list. Returns false if it was
    /// already there.
    pub fn mark_resolved(&mut self, member: MemberRef) -> bool {
        if !self.resolved_set.insert(member.clone()) {
            return false;
        }
        self.resolved.push(member);
        true
    }

    pub fn mark_unresolved(&mut self, symbol: String) {
        self.unresolved.insert(symbol);
    }

    /// Queues `symbol` unless it is already satisfied or known to be missing.
    pub fn require(&mut self, symbol: &str) -> bool {
        if self.provided.contains_key(symbol) || self.unresolved.contains(symbol) {
            return false;
        }
        self.pending.push_back(symbol.to_string());
        true
    }

    pub fn provider(&self, symbol: &str) -> Option<&Provider> {
        self.provided.get(symbol)
    }

    pub fn provide(&mut self, symbol: &str, member: MemberRef, weak: bool) {
        self.provided
            .insert(symbol.to_string(), Provider { member, weak });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_fifo() {
        let mut state = ResolutionState::new(["a", "b"]);
        state.require("c");

        assert_eq!(state.next_symbol().as_deref(), Some("a"));
        assert_eq!(state.next_symbol().as_deref(), Some("b"));
        assert_eq!(state.next_symbol().as_deref(), Some("c"));
        assert_eq!(state.next_symbol(), None);
    }

    #[test]
    fn test_mark_resolved_rejects_duplicates() {
        let mut state = ResolutionState::new(Vec::<String>::new());

        assert!(state.mark_resolved(MemberRef::new(0, "a.o")));
        assert!(!state.mark_resolved(MemberRef::new(0, "a.o")));
        assert!(state.mark_resolved(MemberRef::new(1, "a.o")));
        assert_eq!(state.resolved.len(), 2);
    }

    #[test]
    fn test_require_skips_known_symbols() {
        let mut state = ResolutionState::new(Vec::<String>::new());
        state.provide("x", MemberRef::new(0, "x.o"), false);
        state.mark_unresolved("y".to_string());

        assert!(!state.require("x"));
        assert!(!state.require("y"));
        assert!(state.require("z"));
        assert_eq!(state.pending.len(), 1);
    }
}
