// Fri Jan 16 2026 - Alex

use crate::archive::ArchiveFile;
use crate::resolve::{Resolution, Resolver};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub archives: Vec<PathBuf>,
    pub objects: Vec<ObjectReport>,
    /// Symbol to `archive:member`.
    pub provided: BTreeMap<String, String>,
    pub extracted: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectReport {
    pub archive: String,
    pub member: String,
    pub def: Vec<String>,
    pub undef: Vec<String>,
    pub weak: Vec<String>,
}

impl ResolutionReport {
    pub fn new(archives: &[ArchiveFile], resolution: &Resolution, extracted: &[PathBuf]) -> Self {
        let resolver = Resolver::new(archives);
        let label = |archive: usize, member: &str| {
            format!("{}:{}", resolver.archive_name(archive).unwrap_or("?"), member)
        };

        let objects = resolution
            .objects
            .iter()
            .map(|object| {
                let symbols = resolver.member_symbols(object).cloned().unwrap_or_default();
                ObjectReport {
                    archive: resolver.archive_name(object.archive).unwrap_or("?").to_string(),
                    member: object.member.clone(),
                    def: symbols.def.into_iter().collect(),
                    undef: symbols.undef.into_iter().collect(),
                    weak: symbols.weak.into_iter().collect(),
                }
            })
            .collect();

        let provided = resolution
            .provided
            .iter()
            .map(|(symbol, member)| (symbol.clone(), label(member.archive, &member.member)))
            .collect();

        Self {
            archives: archives.iter().map(|a| a.path().to_path_buf()).collect(),
            objects,
            provided,
            extracted: extracted.to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
