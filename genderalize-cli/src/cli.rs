//! Command-line structure and shared setup

use crate::commands::Commands;
use crate::config::CliConfig;
use crate::lexicon_source::LexiconSource;
use anyhow::{Context, Result};
use clap::{Args, Parser};
use genderalize_api::{Config, Genderalizer};
use std::path::PathBuf;

/// Detect and rewrite gender generalizations in English text
#[derive(Debug, Parser)]
#[command(name = "genderalize", author, version, about, propagate_version = true)]
pub struct Cli {
    /// Options shared by all commands
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn run(&self) -> Result<()> {
        self.command.execute(&self.global)
    }
}

/// Options accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Lexicon JSON file (default: built-in lexicon)
    #[arg(long, value_name = "FILE", global = true, env = "GENDERALIZE_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Additional first names, one per line
    #[arg(long, value_name = "FILE", global = true)]
    pub names: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A second initialization (tests calling in-process) is not an error
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }

    /// Load the configuration file, or defaults when none is given
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Build a genderalizer from flags layered over the configuration file
    pub fn genderalizer(&self, config: &CliConfig, rewrite_all: bool) -> Result<Genderalizer> {
        let source = LexiconSource::resolve(self.lexicon.as_deref(), config)?;
        log::info!("Using lexicon: {}", source.display_name());
        let lexicon = source
            .load()
            .with_context(|| format!("Failed to load lexicon ({})", source.display_name()))?;

        let mut builder = Config::builder()
            .lexicon(lexicon)
            .extra_names(config.pipeline.extra_names.iter().cloned())
            .rewrite_all(rewrite_all || config.processing.rewrite_all);
        if let Some(names) = self.names.as_ref().or(config.pipeline.names_file.as_ref()) {
            builder = builder.names_file(names);
        }

        let genderalizer = Genderalizer::with_config(builder.build()?)
            .context("Failed to initialize the analysis pipeline")?;
        Ok(genderalizer)
    }
}
