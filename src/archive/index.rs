// Fri Jan 16 2026 - Alex

use crate::archive::{ArchiveError, MemberSymbols};
use goblin::archive::Archive;
use goblin::elf::section_header::{SHN_UNDEF, SHT_SYMTAB};
use goblin::elf::sym::{STB_GLOBAL, STB_WEAK};
use goblin::elf::Elf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Symbol tables of every object in one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveIndex {
    /// Objects in archive order. Members without a `.symtab` are absent.
    pub members: IndexMap<String, MemberSymbols>,
    /// Symbol name to the member defining it. The first member wins.
    pub symbols: HashMap<String, String>,
    /// Definitions shadowed by an earlier member of the same archive.
    pub duplicates: Vec<DuplicateDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateDefinition {
    pub symbol: String,
    pub kept: String,
    pub shadowed: String,
}

impl ArchiveIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `ar` archive and classifies the symbols of every member.
    ///
    /// Any member that is not a well-formed ELF object fails the whole archive,
    /// no partial index is returned.
    pub fn build(archive_name: &str, data: &[u8]) -> Result<Self, ArchiveError> {
        let archive = Archive::parse(data).map_err(|e| {
            ArchiveError::parse(archive_name, format!("Failed to parse archive: {}", e))
        })?;

        let mut index = Self::new();
        for (member_name, bytes) in ordered_members(archive_name, &archive, data)? {
            if index.members.contains_key(member_name) {
                log::debug!("{}: ignoring second member named {}", archive_name, member_name);
                continue;
            }

            let symbols = Self::index_object(bytes).map_err(|e| {
                ArchiveError::parse(archive_name, format!("Failed to parse ELF {}: {}", member_name, e))
            })?;

            if let Some(symbols) = symbols {
                index.insert_member(member_name, symbols);
            }
        }

        Ok(index)
    }

    fn index_object(data: &[u8]) -> Result<Option<MemberSymbols>, goblin::error::Error> {
        let elf = Elf::parse(data)?;

        let has_symtab = elf
            .section_headers
            .iter()
            .any(|shdr| shdr.sh_type == SHT_SYMTAB);
        if !has_symtab {
            return Ok(None);
        }

        let mut member = MemberSymbols::new();
        for sym in elf.syms.iter() {
            let bind = sym.st_bind();
            if bind != STB_GLOBAL && bind != STB_WEAK {
                continue;
            }

            let name = match elf.strtab.get_at(sym.st_name) {
                Some(name) if !name.is_empty() => name,
                _ => continue,
            };

            let weak = bind == STB_WEAK;
            if sym.st_shndx != SHN_UNDEF as usize {
                member.add_def(name, weak);
            } else {
                member.add_undef(name, weak);
            }
        }

        Ok(Some(member))
    }

    /// Adds a member and publishes its definitions in the archive symbol table.
    pub fn insert_member(&mut self, name: &str, symbols: MemberSymbols) {
        for symbol in &symbols.def {
            match self.symbols.get(symbol) {
                Some(kept) if kept != name => {
                    log::debug!(
                        "{} defined by both {} and {}, keeping {}",
                        symbol, kept, name, kept
                    );
                    self.duplicates.push(DuplicateDefinition {
                        symbol: symbol.clone(),
                        kept: kept.clone(),
                        shadowed: name.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    self.symbols.insert(symbol.clone(), name.to_string());
                }
            }
        }

        self.members.insert(name.to_string(), symbols);
    }

    pub fn provider(&self, symbol: &str) -> Option<&str> {
        self.symbols.get(symbol).map(|s| s.as_str())
    }

    pub fn member(&self, name: &str) -> Option<&MemberSymbols> {
        self.members.get(name)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}

/// Members with their raw bytes, in the order they are stored in the archive.
pub(crate) fn ordered_members<'a, 'b>(
    archive_name: &str,
    archive: &'b Archive<'a>,
    data: &'a [u8],
) -> Result<Vec<(&'b str, &'a [u8])>, ArchiveError> {
    let mut members = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let member = match archive.get_at(i) {
            Some(member) => member,
            None => continue,
        };
        let name = member.extended_name();
        let start = member.offset as usize;
        let bytes = start
            .checked_add(member.size())
            .and_then(|end| data.get(start..end))
            .ok_or_else(|| {
                ArchiveError::parse(archive_name, format!("Member {} runs past end of archive", name))
            })?;
        members.push((name, bytes));
    }
    Ok(members)
}

impl FromIterator<(String, MemberSymbols)> for ArchiveIndex {
    fn from_iter<I: IntoIterator<Item = (String, MemberSymbols)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (name, symbols) in iter {
            index.insert_member(&name, symbols);
        }
        index
    }
}
