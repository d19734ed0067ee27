//! Gender annotation and gender generalization detection
//!
//! This crate annotates tokenized sentences with lexicon gender labels,
//! decides whether a sentence generalizes a role to one gender through its
//! pronouns, and rewrites such sentences towards a target gender while
//! keeping capitalization, spacing and punctuation intact.
//!
//! # Architecture
//!
//! - **Lexicon**: immutable phrase → gender mapping, validated at load
//! - **Matcher**: leftmost-longest phrase matching over tokens
//! - **Classifier**: four boolean facts per sentence
//! - **Replacer**: single-pass, offset-based pronoun rewriting
//!
//! Tokenization, tagging and entity recognition are supplied by an
//! [`NlpPipeline`] implementation.
//!
//! # Example
//!
//! ```rust
//! use genderalize_core::{
//!     analyze, rewrite, EntitySpan, FineTag, Gender, GenderMatcher, Lexicon, PosTag,
//!     Sentence, Token,
//! };
//!
//! let lexicon = Lexicon::from_json_str(r#"{"she": "f", "her": "f"}"#).unwrap();
//! let matcher = GenderMatcher::with_whitespace_split(&lexicon);
//!
//! let words = [("She", " ", PosTag::Pron, "PRP"), ("flies", "", PosTag::Verb, "VBZ")];
//! let mut offset = 0;
//! let tokens: Vec<Token> = words
//!     .iter()
//!     .enumerate()
//!     .map(|(index, (text, ws, pos, tag))| {
//!         let token = Token {
//!             text: text.to_string(),
//!             whitespace: ws.to_string(),
//!             index,
//!             offset,
//!             pos: *pos,
//!             tag: FineTag::from(*tag),
//!         };
//!         offset += text.len() + ws.len();
//!         token
//!     })
//!     .collect();
//! let sentence = Sentence::new("She flies", tokens, Vec::<EntitySpan>::new());
//!
//! let analyzed = analyze(sentence, &matcher);
//! assert!(analyzed.is_gender_generalization());
//! assert_eq!(rewrite(&analyzed, Gender::Masculine).unwrap(), "He flies");
//! ```

#![warn(missing_docs)]

pub mod annotations;
pub mod classifier;
pub mod error;
pub mod gender;
pub mod lexicon;
pub mod matcher;
pub mod pipeline;
pub mod replacer;
pub mod types;

pub use annotations::GenderAnnotations;
pub use classifier::GeneralizationFacts;
pub use error::{CoreError, Result};
pub use gender::{Gender, ParseGenderError};
pub use lexicon::{LabelCounts, Lexicon};
pub use matcher::{GenderMatcher, PhraseMatch};
pub use pipeline::{analyze, plan, rewrite, AnalyzedSentence, Analyzer, NlpPipeline};
pub use replacer::{replace_pronouns, Replacement, ReplacementPlan};
pub use types::{reconstruct, EntityLabel, EntitySpan, FineTag, PosTag, Sentence, Token};
