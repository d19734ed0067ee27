//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Lexicon configuration
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Pipeline configuration
    #[serde(default)]
    pub pipeline: PipelineSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.default_format()?;
        Ok(config)
    }

    /// The configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }
}

/// Lexicon-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct LexiconConfig {
    /// Lexicon JSON file, the embedded lexicon when unset
    pub path: Option<PathBuf>,
}

/// Pipeline-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PipelineSection {
    /// File of additional first names, one per line
    pub names_file: Option<PathBuf>,

    /// Additional first names
    pub extra_names: Vec<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Rewrite texts that are not gender generalizations too
    pub rewrite_all: bool,

    /// Process batch documents in parallel
    pub parallel: bool,
}
