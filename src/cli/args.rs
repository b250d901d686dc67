// Fri Jan 16 2026 - Alex

use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arsym")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Pick the archive members needed to satisfy a set of symbols", long_about = None)]
pub struct Args {
    /// AR archives (*.a) in search order, and the symbols to resolve
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Target architecture; extracts objects into runtime/libgcc-<ARCH>
    #[arg(long)]
    pub arch: Option<String>,

    /// Extract objects into this directory instead
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the defined and required symbols of every object
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JSON report
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    #[arg(long)]
    pub no_cache: bool,

    /// Remove cached indexes before running
    #[arg(long)]
    pub clear_cache: bool,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub threads: Option<usize>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Splits inputs into archive paths and symbol names, keeping the order
    /// of each.
    pub fn split_inputs(&self) -> (Vec<PathBuf>, Vec<String>) {
        let (archives, symbols): (Vec<&String>, Vec<&String>) =
            self.inputs.iter().partition(|input| input.ends_with(".a"));

        (
            archives.into_iter().map(PathBuf::from).collect(),
            symbols.into_iter().cloned().collect(),
        )
    }

    pub fn to_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(dir) = &self.cache_dir {
            config = config.with_cache_dir(dir.clone());
        }
        if self.no_cache {
            config = config.with_cache_enabled(false);
        }
        if let Some(arch) = &self.arch {
            config = config.with_arch(arch.clone());
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir.clone());
        }
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        if self.verbose {
            config = config.with_verbose(true);
        }
        if self.json {
            config = config.with_json_output(true);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let (archives, symbols) = self.split_inputs();
        if archives.is_empty() {
            return Err("at least one archive (*.a) is required".to_string());
        }
        if symbols.is_empty() {
            return Err("at least one symbol is required".to_string());
        }
        Ok(())
    }
}
