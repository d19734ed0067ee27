//! The rule-based [`NlpPipeline`] implementation

use crate::config::PipelineConfig;
use crate::ner::{recognize, Gazetteer};
use crate::tagger::tag;
use crate::tokenizer::tokenize;
use genderalize_core::{FineTag, NlpPipeline, Sentence, Token};
use std::sync::Arc;

/// Tokenizer, tagger and gazetteer NER for English text
#[derive(Debug, Clone)]
pub struct RuleBasedPipeline {
    names: Arc<Gazetteer>,
}

impl Default for RuleBasedPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedPipeline {
    /// Pipeline with the bundled first names
    pub fn new() -> Self {
        Self {
            names: Gazetteer::bundled(),
        }
    }

    /// Pipeline built from a configuration
    pub fn with_config(config: &PipelineConfig) -> Self {
        if config.bundled_names && config.extra_names.is_empty() {
            return Self::new();
        }

        let mut names = if config.bundled_names {
            Gazetteer::bundled().as_ref().clone()
        } else {
            Gazetteer::new()
        };
        names.extend(&config.extra_names);
        log::debug!("pipeline recognizes {} first names", names.len());

        Self {
            names: Arc::new(names),
        }
    }

    /// The first names this pipeline recognizes
    pub fn names(&self) -> &Gazetteer {
        &self.names
    }
}

impl NlpPipeline for RuleBasedPipeline {
    fn process(&self, text: &str) -> Sentence {
        let raw = tokenize(text);
        let texts: Vec<&str> = raw.iter().map(|token| &text[token.text.clone()]).collect();
        let tags = tag(&texts, &self.names);
        let entities = recognize(&texts, &self.names);

        let tokens = raw
            .iter()
            .zip(tags)
            .enumerate()
            .map(|(index, (token, (pos, fine)))| Token {
                text: text[token.text.clone()].to_string(),
                whitespace: text[token.whitespace.clone()].to_string(),
                index,
                offset: token.text.start,
                pos,
                tag: FineTag::from(fine),
            })
            .collect();

        Sentence::new(text, tokens, entities)
    }
}
