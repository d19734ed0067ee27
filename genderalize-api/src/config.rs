//! High-level configuration API

use crate::error::{ApiError, Result};
use genderalize_core::Lexicon;
use genderalize_nlp::PipelineConfig;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the lexicon comes from
#[derive(Debug, Clone, Default)]
pub enum LexiconSource {
    /// The bundled `words.json`
    #[default]
    Embedded,
    /// A JSON file on disk
    File(PathBuf),
    /// An already loaded lexicon
    Loaded(Arc<Lexicon>),
}

/// Configuration for a [`crate::Genderalizer`]
#[derive(Debug, Clone, Default)]
pub struct Config {
    lexicon: LexiconSource,
    extra_names: Vec<String>,
    names_file: Option<PathBuf>,
    rewrite_all: bool,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The lexicon source
    pub fn lexicon_source(&self) -> &LexiconSource {
        &self.lexicon
    }

    /// First names recognized besides the bundled list
    pub fn extra_names(&self) -> &[String] {
        &self.extra_names
    }

    /// Rewrite every sentence, not only gender generalizations
    pub fn rewrite_all(&self) -> bool {
        self.rewrite_all
    }

    /// Load the configured lexicon
    pub fn load_lexicon(&self) -> Result<Arc<Lexicon>> {
        match &self.lexicon {
            LexiconSource::Embedded => Ok(Lexicon::embedded()),
            LexiconSource::File(path) => {
                let lexicon = Lexicon::from_file(path)?;
                log::info!("loaded {} lexicon entries from {}", lexicon.len(), path.display());
                Ok(Arc::new(lexicon))
            }
            LexiconSource::Loaded(lexicon) => Ok(Arc::clone(lexicon)),
        }
    }

    /// Pipeline settings derived from this configuration
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig::default().with_names(self.extra_names.iter().cloned());
        match &self.names_file {
            Some(path) => Ok(config.with_names_file(path)?),
            None => Ok(config),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
    lexicon_file: Option<PathBuf>,
    lexicon: Option<Arc<Lexicon>>,
}

impl ConfigBuilder {
    /// Load the lexicon from a JSON file
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_file = Some(path.into());
        self
    }

    /// Use an already loaded lexicon
    pub fn lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.lexicon = Some(lexicon.into());
        self
    }

    /// Recognize additional first names as people
    pub fn extra_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .extra_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Read additional first names from a file, one per line
    pub fn names_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.names_file = Some(path.into());
        self
    }

    /// Rewrite sentences even when they are not gender generalizations
    pub fn rewrite_all(mut self, rewrite_all: bool) -> Self {
        self.config.rewrite_all = rewrite_all;
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> Result<Config> {
        self.config.lexicon = match (self.lexicon_file, self.lexicon) {
            (Some(_), Some(_)) => {
                return Err(ApiError::Config(
                    "lexicon and lexicon_file are mutually exclusive".to_string(),
                ))
            }
            (Some(path), None) => {
                if !path.is_file() {
                    return Err(ApiError::Config(format!(
                        "lexicon file not found: {}",
                        path.display()
                    )));
                }
                LexiconSource::File(path)
            }
            (None, Some(lexicon)) => LexiconSource::Loaded(lexicon),
            (None, None) => LexiconSource::Embedded,
        };

        if self.config.extra_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ApiError::Config("extra names must not be blank".to_string()));
        }

        Ok(self.config)
    }
}
