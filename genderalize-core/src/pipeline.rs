//! Pipeline interface and the match → classify → rewrite chain
//!
//! Tokenization, tagging and entity recognition are delegated to an
//! [`NlpPipeline`]. The stages here take an immutable [`Sentence`] and return
//! new values; nothing shared is mutated.

use crate::annotations::GenderAnnotations;
use crate::classifier::GeneralizationFacts;
use crate::error::Result;
use crate::gender::Gender;
use crate::lexicon::Lexicon;
use crate::matcher::GenderMatcher;
use crate::replacer::{plan_replacements, replace_pronouns, ReplacementPlan};
use crate::types::{PosTag, Sentence};
use std::sync::{Arc, OnceLock};

/// Tokenizer, tagger and entity recognizer
///
/// Implementations are initialized once and shared across calls.
pub trait NlpPipeline: Send + Sync {
    /// Tokenize, tag and recognize entities in `text`
    ///
    /// Reconstructing the returned tokens must yield `text` exactly.
    fn process(&self, text: &str) -> Sentence;

    /// Token texts of a lexicon phrase, whitespace tokens excluded
    fn phrase_tokens(&self, phrase: &str) -> Vec<String> {
        self.process(phrase)
            .tokens()
            .iter()
            .filter(|token| token.pos != PosTag::Space)
            .map(|token| token.text.clone())
            .collect()
    }
}

impl<P: NlpPipeline + ?Sized> NlpPipeline for Arc<P> {
    fn process(&self, text: &str) -> Sentence {
        (**self).process(text)
    }

    fn phrase_tokens(&self, phrase: &str) -> Vec<String> {
        (**self).phrase_tokens(phrase)
    }
}

/// A sentence with its gender annotations and lazily computed facts
#[derive(Debug, Clone)]
pub struct AnalyzedSentence {
    sentence: Sentence,
    annotations: GenderAnnotations,
    facts: OnceLock<GeneralizationFacts>,
}

impl AnalyzedSentence {
    /// Pair a sentence with annotations produced for it
    pub fn new(sentence: Sentence, annotations: GenderAnnotations) -> Self {
        Self {
            sentence,
            annotations,
            facts: OnceLock::new(),
        }
    }

    /// The underlying sentence
    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    /// Per-token gender annotations
    pub fn annotations(&self) -> &GenderAnnotations {
        &self.annotations
    }

    /// Source text
    pub fn text(&self) -> &str {
        self.sentence.text()
    }

    /// All facts, computed on first access
    pub fn facts(&self) -> GeneralizationFacts {
        *self
            .facts
            .get_or_init(|| GeneralizationFacts::compute(&self.sentence, &self.annotations))
    }

    /// The sentence names a person
    pub fn has_person(&self) -> bool {
        self.facts().has_person
    }

    /// The sentence contains gendered pronouns
    pub fn has_gendered_pronouns(&self) -> bool {
        self.facts().has_gendered_pronouns
    }

    /// The sentence contains gendered nouns
    pub fn has_gendered_nouns(&self) -> bool {
        self.facts().has_gendered_nouns
    }

    /// Gendered pronouns without a person or gendered noun to justify them
    pub fn is_gender_generalization(&self) -> bool {
        self.facts().is_gender_generalization
    }
}

/// Match stage: annotate a sentence with lexicon genders
pub fn analyze(sentence: Sentence, matcher: &GenderMatcher) -> AnalyzedSentence {
    let annotations = matcher.annotate(&sentence);
    AnalyzedSentence::new(sentence, annotations)
}

/// Rewrite stage: swap pronouns that disagree with `target`
pub fn rewrite(analyzed: &AnalyzedSentence, target: Gender) -> Result<String> {
    replace_pronouns(analyzed.sentence(), analyzed.annotations(), target)
}

/// Planned edits of the rewrite stage, without applying them
pub fn plan(analyzed: &AnalyzedSentence, target: Gender) -> Result<ReplacementPlan> {
    plan_replacements(analyzed.sentence(), analyzed.annotations(), target)
}

/// An initialized pipeline bound to a compiled lexicon
#[derive(Clone)]
pub struct Analyzer {
    pipeline: Arc<dyn NlpPipeline>,
    matcher: Arc<GenderMatcher>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("pipeline", &"<dyn NlpPipeline>")
            .field("phrases", &self.matcher.phrase_count())
            .finish()
    }
}

impl Analyzer {
    /// Compile `lexicon` with `pipeline`'s tokenization
    pub fn new(pipeline: Arc<dyn NlpPipeline>, lexicon: &Lexicon) -> Self {
        let matcher = Arc::new(GenderMatcher::new(lexicon, pipeline.as_ref()));
        Self { pipeline, matcher }
    }

    /// Bind an already compiled matcher
    pub fn with_matcher(pipeline: Arc<dyn NlpPipeline>, matcher: Arc<GenderMatcher>) -> Self {
        Self { pipeline, matcher }
    }

    /// The compiled matcher
    pub fn matcher(&self) -> &GenderMatcher {
        &self.matcher
    }

    /// The bound pipeline
    pub fn pipeline(&self) -> &dyn NlpPipeline {
        self.pipeline.as_ref()
    }

    /// Tokenize and annotate `text`
    pub fn analyze_text(&self, text: &str) -> AnalyzedSentence {
        analyze(self.pipeline.process(text), &self.matcher)
    }
}
