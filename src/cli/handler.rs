// Fri Jan 16 2026 - Alex

use super::args::Args;
use crate::engine::Engine;
use crate::output::{ResolutionReport, TextFormatter};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = args.to_config()?;
        let (archives, symbols) = args.split_inputs();
        let engine = Engine::new(config)?;

        if args.clear_cache {
            let removed = engine.cache().clear()?;
            log::info!("Removed {} cache entries", removed);
        }

        let spinner = if engine.config().json_output {
            ProgressBar::hidden()
        } else {
            self.spinner(archives.len())
        };

        let loaded = engine.load(&archives);
        spinner.finish_and_clear();
        let loaded = loaded?;

        let resolution = engine.resolve(&loaded, &symbols)?;
        let extracted = engine.extract(&loaded, &resolution)?;

        if engine.config().json_output {
            let report = ResolutionReport::new(&loaded, &resolution, &extracted);
            println!("{}", report.to_json()?);
            return Ok(());
        }

        let resolver = crate::resolve::Resolver::new(&loaded);
        let text = TextFormatter::new()
            .with_verbose(engine.config().verbose)
            .format(&resolver, &resolution);
        print!("{}", text);

        if !extracted.is_empty() {
            if let Some(extractor) = engine.config().extractor() {
                eprintln!(
                    "{} Extracted {} objects to {}",
                    "[+]".green(),
                    extracted.len(),
                    extractor.output_dir().display()
                );
            }
        }

        Ok(())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };
        let level = if args.verbose { level.max(log::LevelFilter::Info) } else { level };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()?;

        Ok(())
    }

    fn spinner(&self, archives: usize) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Indexing {} archives...", archives));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
