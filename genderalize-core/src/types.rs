//! Token, entity and sentence types produced by an NLP pipeline
//!
//! These types are immutable once a pipeline has built them. Gender
//! annotations live beside them in [`crate::GenderAnnotations`], never on the
//! tokens themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech tag (Universal Dependencies tag set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Common noun
    Noun,
    /// Numeral
    Num,
    /// Particle
    Part,
    /// Pronoun
    Pron,
    /// Proper noun
    Propn,
    /// Punctuation
    Punct,
    /// Subordinating conjunction
    Sconj,
    /// Symbol
    Sym,
    /// Verb
    Verb,
    /// Whitespace
    Space,
    /// Other
    X,
}

impl PosTag {
    /// Tag name as printed by most taggers
    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::Space => "SPACE",
            PosTag::X => "X",
        }
    }

    /// `NOUN` or `PROPN`
    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained (Penn Treebank style) tag
///
/// Personal and possessive pronouns get dedicated variants because the
/// pronoun tables are keyed on them; every other tag is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FineTag {
    /// `PRP`: he, him, himself, hers, ...
    PersonalPronoun,
    /// `PRP$`: his, her, my, their, ...
    PossessivePronoun,
    /// Any other tag
    Other(String),
}

impl FineTag {
    /// Tag text
    pub fn as_str(&self) -> &str {
        match self {
            FineTag::PersonalPronoun => "PRP",
            FineTag::PossessivePronoun => "PRP$",
            FineTag::Other(tag) => tag,
        }
    }

    /// `PRP` or `PRP$`
    pub fn is_pronoun(&self) -> bool {
        matches!(self, FineTag::PersonalPronoun | FineTag::PossessivePronoun)
    }
}

impl From<&str> for FineTag {
    fn from(tag: &str) -> Self {
        match tag {
            "PRP" => FineTag::PersonalPronoun,
            "PRP$" => FineTag::PossessivePronoun,
            other => FineTag::Other(other.to_string()),
        }
    }
}

impl From<String> for FineTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PRP" => FineTag::PersonalPronoun,
            "PRP$" => FineTag::PossessivePronoun,
            _ => FineTag::Other(tag),
        }
    }
}

impl From<FineTag> for String {
    fn from(tag: FineTag) -> Self {
        match tag {
            FineTag::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token of a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Whitespace that followed the token in the source
    pub whitespace: String,
    /// Position in the sentence's token sequence
    pub index: usize,
    /// Byte offset of `text` in the source
    pub offset: usize,
    /// Coarse part-of-speech tag
    pub pos: PosTag,
    /// Fine-grained tag
    pub tag: FineTag,
}

impl Token {
    /// Surface text followed by its trailing whitespace
    pub fn text_with_ws(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + self.whitespace.len());
        out.push_str(&self.text);
        out.push_str(&self.whitespace);
        out
    }

    /// Whether any whitespace followed this token
    pub fn has_whitespace(&self) -> bool {
        !self.whitespace.is_empty()
    }

    /// Byte range of the surface text in the source
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    /// Lowercased surface text
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Named-entity label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// `PERSON`
    Person,
    /// Any other entity label
    Other(String),
}

impl EntityLabel {
    /// Label text
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Other(label) => label,
        }
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        if label == "PERSON" {
            EntityLabel::Person
        } else {
            EntityLabel::Other(label)
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        match label {
            EntityLabel::Person => "PERSON".to_string(),
            EntityLabel::Other(label) => label,
        }
    }
}

/// A contiguous, labelled run of tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// First token index
    pub start: usize,
    /// One past the last token index
    pub end: usize,
    /// Entity label
    pub label: EntityLabel,
}

impl EntitySpan {
    /// Create a new span over `start..end`
    pub fn new(start: usize, end: usize, label: EntityLabel) -> Self {
        Self { start, end, label }
    }

    /// Whether the span is labelled `PERSON`
    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}

/// A tokenized, tagged sentence (or document)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    entities: Vec<EntitySpan>,
}

impl Sentence {
    /// Assemble a sentence from pipeline output
    pub fn new(text: impl Into<String>, tokens: Vec<Token>, entities: Vec<EntitySpan>) -> Self {
        Self {
            text: text.into(),
            tokens,
            entities,
        }
    }

    /// Source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Named-entity spans
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Concatenate each token's text with its trailing whitespace
pub fn reconstruct(tokens: &[Token]) -> String {
    let capacity = tokens
        .iter()
        .map(|t| t.text.len() + t.whitespace.len())
        .sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        out.push_str(&token.text);
        out.push_str(&token.whitespace);
    }
    out
}
