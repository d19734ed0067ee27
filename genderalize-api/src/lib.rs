//! Public API for genderalize
//!
//! This crate wraps the lexicon, the rule-based pipeline and the core
//! matcher into one [`Genderalizer`] with a stable interface.
//!
//! ```rust
//! use genderalize_api::{change, detect};
//!
//! assert!(detect("The programmer put down his laptop."));
//! assert!(!detect("Jason put down his coffee."));
//! assert_eq!(change("m", "Is she an astronaut?").unwrap(), "Is he an astronaut?");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use genderalize_core::{rewrite, Analyzer, Lexicon};
use genderalize_nlp::RuleBasedPipeline;
use std::sync::{Arc, OnceLock};

// Re-export key types
pub use config::{Config, ConfigBuilder, LexiconSource};
pub use dto::{Analysis, Biases, EntityDTO, Input, TextPayload, TokenDTO};
pub use error::{ApiError, Result};
pub use genderalize_core::{AnalyzedSentence, Gender, GeneralizationFacts, NlpPipeline};

/// Main entry point for detection and rewriting
///
/// The lexicon, compiled matcher and pipeline are built once; clones share
/// them.
#[derive(Debug, Clone)]
pub struct Genderalizer {
    analyzer: Analyzer,
    lexicon: Arc<Lexicon>,
    config: Config,
}

impl Default for Genderalizer {
    /// Embedded lexicon with the bundled first names
    fn default() -> Self {
        let lexicon = Lexicon::embedded();
        let analyzer = Analyzer::new(Arc::new(RuleBasedPipeline::new()), &lexicon);
        Self {
            analyzer,
            lexicon,
            config: Config::default(),
        }
    }
}

impl Genderalizer {
    /// Create a genderalizer with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a genderalizer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let pipeline = RuleBasedPipeline::with_config(&config.pipeline_config()?);
        Self::with_pipeline(Arc::new(pipeline), config)
    }

    /// Create a genderalizer around another pipeline implementation
    pub fn with_pipeline(pipeline: Arc<dyn NlpPipeline>, config: Config) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        let analyzer = Analyzer::new(pipeline, &lexicon);
        log::debug!("{:?} ready", analyzer);

        Ok(Self {
            analyzer,
            lexicon,
            config,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The active lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Tokenize and annotate `text`
    pub fn analyze_text(&self, text: &str) -> AnalyzedSentence {
        self.analyzer.analyze_text(text)
    }

    /// Whether `text` generalizes a role to one gender
    pub fn detect(&self, text: &str) -> bool {
        self.analyze_text(text).is_gender_generalization()
    }

    /// Rewrite the gendered pronouns of `text` towards `target`
    ///
    /// Unless `rewrite_all` is configured, texts that are not gender
    /// generalizations come back unchanged.
    pub fn change(&self, target: Gender, text: &str) -> Result<String> {
        let target = ensure_target(target)?;
        let analyzed = self.analyze_text(text);
        if !self.config.rewrite_all() && !analyzed.is_gender_generalization() {
            return Ok(text.to_string());
        }
        Ok(rewrite(&analyzed, target)?)
    }

    /// [`Genderalizer::change`] with a `"m"` or `"f"` label
    pub fn change_label(&self, label: &str, text: &str) -> Result<String> {
        self.change(parse_target(label)?, text)
    }

    /// Facts, token annotations and entities of `text`
    pub fn analyze(&self, text: &str) -> Analysis {
        Analysis::from(&self.analyze_text(text))
    }

    /// Analyze text read from `input`
    pub fn analyze_input(&self, input: Input) -> Result<Analysis> {
        let text = input.read_text()?;
        Ok(self.analyze(&text))
    }

    /// Detection in the request/response shape of the biases endpoint
    pub fn biases(&self, payload: &TextPayload) -> Biases {
        Biases {
            generalization: self.detect(&payload.text),
        }
    }

    /// Rewriting in the request/response shape of the generalization endpoint
    pub fn generalization(&self, gender: &str, payload: &TextPayload) -> Result<TextPayload> {
        Ok(TextPayload::new(self.change_label(gender, &payload.text)?))
    }
}

/// Parse a target gender label, only `m` and `f` are accepted
pub fn parse_target(label: &str) -> Result<Gender> {
    let gender: Gender = label
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidGender(label.to_string()))?;
    ensure_target(gender)
}

fn ensure_target(target: Gender) -> Result<Gender> {
    if target.is_gendered() {
        Ok(target)
    } else {
        Err(ApiError::InvalidGender(target.label().to_string()))
    }
}

// Convenience functions

fn shared() -> &'static Genderalizer {
    static DEFAULT: OnceLock<Genderalizer> = OnceLock::new();
    DEFAULT.get_or_init(Genderalizer::default)
}

/// Detect a gender generalization with the default configuration
pub fn detect(text: &str) -> bool {
    shared().detect(text)
}

/// Rewrite `text` towards `"m"` or `"f"` with the default configuration
pub fn change(target: &str, text: &str) -> Result<String> {
    shared().change_label(target, text)
}

/// Analyze `text` with the default configuration
pub fn analyze(text: &str) -> Analysis {
    shared().analyze(text)
}
