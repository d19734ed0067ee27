//! Gender generalization classifier
//!
//! A sentence generalizes a gender when it uses a gendered pronoun but gives
//! no other gender signal: no named person and no gendered noun.

use crate::annotations::GenderAnnotations;
use crate::types::Sentence;
use serde::{Deserialize, Serialize};

/// Whether any entity span is a `PERSON`
pub fn has_person(sentence: &Sentence) -> bool {
    sentence.entities().iter().any(|span| span.is_person())
}

/// Whether any `PRP`/`PRP$` token is annotated `m` or `f`
pub fn has_gendered_pronouns(sentence: &Sentence, annotations: &GenderAnnotations) -> bool {
    sentence
        .tokens()
        .iter()
        .any(|token| token.tag.is_pronoun() && annotations.is_gendered(token.index))
}

/// Whether any `NOUN`/`PROPN` token is annotated `m` or `f`
pub fn has_gendered_nouns(sentence: &Sentence, annotations: &GenderAnnotations) -> bool {
    sentence
        .tokens()
        .iter()
        .any(|token| token.pos.is_nominal() && annotations.is_gendered(token.index))
}

/// The four sentence-level facts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneralizationFacts {
    /// The sentence names a person
    pub has_person: bool,
    /// The sentence contains he/him/she/herself/...
    pub has_gendered_pronouns: bool,
    /// The sentence contains gendered nouns such as aunt or policeman
    pub has_gendered_nouns: bool,
    /// Gendered pronouns with neither a person nor a gendered noun
    pub is_gender_generalization: bool,
}

impl GeneralizationFacts {
    /// Combine the three signals into the verdict
    pub fn from_signals(
        has_person: bool,
        has_gendered_pronouns: bool,
        has_gendered_nouns: bool,
    ) -> Self {
        Self {
            has_person,
            has_gendered_pronouns,
            has_gendered_nouns,
            is_gender_generalization: has_gendered_pronouns && !has_person && !has_gendered_nouns,
        }
    }

    /// Compute all facts for an annotated sentence
    pub fn compute(sentence: &Sentence, annotations: &GenderAnnotations) -> Self {
        Self::from_signals(
            has_person(sentence),
            has_gendered_pronouns(sentence, annotations),
            has_gendered_nouns(sentence, annotations),
        )
    }
}
