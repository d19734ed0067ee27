//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use genderalize_core::gender::label_of;
use genderalize_core::{reconstruct, AnalyzedSentence};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for analysis
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A text body, as sent to and returned by the rewrite endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextPayload {
    /// The text
    pub text: String,
}

impl TextPayload {
    /// Wrap a text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Detection response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Biases {
    /// The text is a gender generalization
    pub generalization: bool,
}

/// A token with its gender annotation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDTO {
    /// Surface text
    pub text: String,
    /// Trailing whitespace
    pub whitespace: String,
    /// Coarse part of speech
    pub pos: String,
    /// Fine-grained tag
    pub tag: String,
    /// Gender label, empty when unannotated
    pub gender: String,
}

/// A recognized entity
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityDTO {
    /// First token index
    pub start: usize,
    /// Token index after the last token
    pub end: usize,
    /// Entity label
    pub label: String,
    /// Covered text
    pub text: String,
}

/// Facts and annotations for one text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Source text
    pub text: String,
    /// A person is named
    pub has_person: bool,
    /// Gendered pronouns are present
    pub has_gendered_pronouns: bool,
    /// Gendered nouns are present
    pub has_gendered_nouns: bool,
    /// The text is a gender generalization
    pub is_gender_generalization: bool,
    /// Tokens with gender annotations
    pub tokens: Vec<TokenDTO>,
    /// Recognized entities
    pub entities: Vec<EntityDTO>,
}

impl From<&AnalyzedSentence> for Analysis {
    fn from(analyzed: &AnalyzedSentence) -> Self {
        let sentence = analyzed.sentence();
        let facts = analyzed.facts();

        let tokens = sentence
            .tokens()
            .iter()
            .map(|token| TokenDTO {
                text: token.text.clone(),
                whitespace: token.whitespace.clone(),
                pos: token.pos.as_str().to_string(),
                tag: token.tag.as_str().to_string(),
                gender: label_of(analyzed.annotations().gender(token.index)).to_string(),
            })
            .collect();

        let entities = sentence
            .entities()
            .iter()
            .map(|span| EntityDTO {
                start: span.start,
                end: span.end,
                label: span.label.as_str().to_string(),
                text: sentence
                    .tokens()
                    .get(span.start..span.end)
                    .map(|tokens| reconstruct(tokens).trim_end().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            text: analyzed.text().to_string(),
            has_person: facts.has_person,
            has_gendered_pronouns: facts.has_gendered_pronouns,
            has_gendered_nouns: facts.has_gendered_nouns,
            is_gender_generalization: facts.is_gender_generalization,
            tokens,
            entities,
        }
    }
}

impl Analysis {
    /// Tokens carrying a gender label
    pub fn gendered_tokens(&self) -> impl Iterator<Item = &TokenDTO> {
        self.tokens.iter().filter(|token| !token.gender.is_empty())
    }

    /// Serialize to pretty JSON
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
