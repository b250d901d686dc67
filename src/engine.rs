// Fri Jan 16 2026 - Alex

use crate::archive::ArchiveFile;
use crate::cache::IndexCache;
use crate::config::Config;
use crate::error::Result;
use crate::resolve::{Resolution, Resolver};
use std::path::{Path, PathBuf};

/// Result of a full run: the indexed archives, the selected objects and the
/// files written for them.
#[derive(Debug)]
pub struct Outcome {
    pub archives: Vec<ArchiveFile>,
    pub resolution: Resolution,
    pub extracted: Vec<PathBuf>,
}

impl Outcome {
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.archives)
    }
}

/// Index, resolve, extract.
pub struct Engine {
    config: Config,
    cache: IndexCache,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let cache = config.index_cache();
        Ok(Self { config, cache })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    /// Indexes every archive on a pool of `config.threads` workers.
    pub fn load<P>(&self, paths: &[P]) -> Result<Vec<ArchiveFile>>
    where
        P: AsRef<Path> + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;

        let archives = pool.install(|| ArchiveFile::load_all(paths, &self.cache))?;
        Ok(archives)
    }

    pub fn resolve<S: AsRef<str>>(&self, archives: &[ArchiveFile], symbols: &[S]) -> Result<Resolution> {
        let resolution = Resolver::new(archives).resolve(symbols)?;
        log::info!(
            "Resolved {} symbols to {} objects",
            symbols.len(),
            resolution.len()
        );
        Ok(resolution)
    }

    /// Writes the resolved members if an extraction destination is configured.
    pub fn extract(&self, archives: &[ArchiveFile], resolution: &Resolution) -> Result<Vec<PathBuf>> {
        match self.config.extractor() {
            Some(extractor) => Ok(extractor.extract_all(archives, &resolution.objects)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn run<P, S>(&self, paths: &[P], symbols: &[S]) -> Result<Outcome>
    where
        P: AsRef<Path> + Sync,
        S: AsRef<str>,
    {
        let archives = self.load(paths)?;
        let resolution = self.resolve(&archives, symbols)?;
        let extracted = self.extract(&archives, &resolution)?;

        Ok(Outcome {
            archives,
            resolution,
            extracted,
        })
    }
}
