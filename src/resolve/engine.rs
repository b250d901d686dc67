// Fri Jan 16 2026 - Alex

use crate::archive::{ArchiveFile, ArchiveIndex, MemberSymbols};
use crate::resolve::{MemberRef, ResolutionState, ResolveError};
use serde::Serialize;
use std::collections::HashMap;

/// Objects selected by a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Objects in the order they were first needed, without duplicates.
    pub objects: Vec<MemberRef>,
    /// Symbol name to the object supplying it.
    pub provided: HashMap<String, MemberRef>,
}

impl Resolution {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn provider(&self, symbol: &str) -> Option<&MemberRef> {
        self.provided.get(symbol)
    }

    pub fn contains(&self, archive: usize, member: &str) -> bool {
        self.objects
            .iter()
            .any(|m| m.archive == archive && m.member == member)
    }
}

#[derive(Debug, Clone, Copy)]
struct ArchiveView<'a> {
    name: &'a str,
    index: &'a ArchiveIndex,
}

/// First-archive, first-hit symbol resolution over an ordered archive list.
///
/// A resolver only borrows the indexes; each call to [`Resolver::resolve`]
/// owns its own state, so one resolver may serve several threads.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    archives: Vec<ArchiveView<'a>>,
}

impl<'a> Resolver<'a> {
    pub fn new(archives: &'a [ArchiveFile]) -> Self {
        Self::from_indexes(archives.iter().map(|a| (a.name(), a.index())))
    }

    pub fn from_indexes<I>(archives: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a ArchiveIndex)>,
    {
        Self {
            archives: archives
                .into_iter()
                .map(|(name, index)| ArchiveView { name, index })
                .collect(),
        }
    }

    pub fn archive_count(&self) -> usize {
        self.archives.len()
    }

    pub fn archive_name(&self, archive: usize) -> Option<&'a str> {
        self.archives.get(archive).map(|a| a.name)
    }

    pub fn member_symbols(&self, member: &MemberRef) -> Option<&'a MemberSymbols> {
        self.archives
            .get(member.archive)
            .and_then(|a| a.index.member(&member.member))
    }

    /// `libc.a(printf.o)` style name for diagnostics.
    pub fn describe(&self, member: &MemberRef) -> String {
        match self.archive_name(member.archive) {
            Some(name) => format!("{}({})", name, member.member),
            None => member.to_string(),
        }
    }

    /// Computes the objects needed to define `symbols` and everything they
    /// reference, searching archives in order.
    ///
    /// Either every symbol is satisfied and the full object list is returned,
    /// or an error is returned and nothing else.
    pub fn resolve<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Resolution, ResolveError> {
        let mut state = ResolutionState::new(symbols.iter().map(|s| s.as_ref().to_string()));

        while let Some(symbol) = state.next_symbol() {
            log::trace!("Resolving {}", symbol);

            if state.is_provided(&symbol) {
                continue;
            }

            match self.find(&symbol) {
                Some(member) => {
                    self.expand(&mut state, member)?;
                    // An archive map naming a member that does not define the
                    // symbol leaves it unsatisfied.
                    if !state.is_provided(&symbol) {
                        log::debug!("Archive map entry for {} is stale", symbol);
                        state.mark_unresolved(symbol);
                    }
                }
                None => {
                    log::debug!("No archive defines {}", symbol);
                    state.mark_unresolved(symbol);
                }
            }
        }

        if !state.unresolved.is_empty() {
            return Err(ResolveError::UnresolvedSymbols(
                state.unresolved.into_iter().collect(),
            ));
        }

        Ok(Resolution {
            objects: state.resolved,
            provided: state
                .provided
                .into_iter()
                .map(|(symbol, provider)| (symbol, provider.member))
                .collect(),
        })
    }

    fn find(&self, symbol: &str) -> Option<MemberRef> {
        self.archives.iter().enumerate().find_map(|(i, archive)| {
            archive
                .index
                .provider(symbol)
                .map(|member| MemberRef::new(i, member))
        })
    }

    fn expand(&self, state: &mut ResolutionState, member: MemberRef) -> Result<(), ResolveError> {
        if state.is_resolved(&member) {
            return Ok(());
        }

        let symbols = match self.member_symbols(&member) {
            Some(symbols) => symbols,
            None => return Ok(()),
        };

        log::debug!("Adding {}", self.describe(&member));
        state.mark_resolved(member.clone());

        for symbol in &symbols.def {
            let weak = symbols.is_weak(symbol);

            let replace = match state.provider(symbol) {
                None => true,
                Some(existing) if existing.member == member => false,
                Some(existing) if !existing.weak && !weak => {
                    return Err(ResolveError::MultipleDefinition {
                        symbol: symbol.clone(),
                        first: self.describe(&existing.member),
                        second: self.describe(&member),
                    });
                }
                Some(existing) if existing.weak && !weak => {
                    log::debug!(
                        "{} from {} overrides weak definition in {}",
                        symbol,
                        self.describe(&member),
                        self.describe(&existing.member)
                    );
                    true
                }
                Some(_) => false,
            };

            if replace {
                state.provide(symbol, member.clone(), weak);
            }
        }

        for symbol in &symbols.undef {
            if symbols.is_weak(symbol) {
                log::debug!("Skipping weak dependency: {}", symbol);
                continue;
            }
            state.require(symbol);
        }

        Ok(())
    }
}
