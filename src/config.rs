// Fri Jan 16 2026 - Alex

use crate::cache::IndexCache;
use crate::extract::ObjectExtractor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub cache_enabled: bool,
    /// Target architecture; resolved objects go to `runtime/libgcc-<arch>`.
    pub arch: Option<String>,
    /// Explicit extraction directory, takes precedence over `arch`.
    pub output_dir: Option<PathBuf>,
    pub verbose: bool,
    pub json_output: bool,
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(".cache"),
            cache_enabled: true,
            arch: None,
            output_dir: None,
            verbose: false,
            json_output: false,
            threads: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => {
                let contents = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&contents)?)
            }
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn with_cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = dir;
        self
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn with_arch(mut self, arch: String) -> Self {
        self.arch = Some(arch);
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::Validation("threads must be > 0".to_string()));
        }
        if let Some(arch) = &self.arch {
            if arch.is_empty() || arch.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!("invalid arch: {:?}", arch)));
            }
        }
        Ok(())
    }

    pub fn index_cache(&self) -> IndexCache {
        if self.cache_enabled {
            IndexCache::new(&self.cache_dir)
        } else {
            IndexCache::disabled()
        }
    }

    /// Extractor for the configured destination, if extraction was requested.
    pub fn extractor(&self) -> Option<ObjectExtractor> {
        match (&self.output_dir, &self.arch) {
            (Some(dir), _) => Some(ObjectExtractor::new(dir)),
            (None, Some(arch)) => Some(ObjectExtractor::for_arch(arch)),
            (None, None) => None,
        }
    }
}
