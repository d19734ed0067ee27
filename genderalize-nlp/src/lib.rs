//! Rule-based English pipeline for genderalize
//!
//! Supplies tokens with exact trailing whitespace, coarse and fine
//! part-of-speech tags, and PERSON spans from a first-name gazetteer. The
//! tagger is table and suffix driven; it aims to tell possessive `his`/`her`
//! from personal uses and to find people, not to be a general tagger.
//!
//! ```rust
//! use genderalize_core::{reconstruct, NlpPipeline};
//! use genderalize_nlp::RuleBasedPipeline;
//!
//! let pipeline = RuleBasedPipeline::new();
//! let sentence = pipeline.process("The apple was his.");
//! assert_eq!(sentence.tokens()[3].tag.as_str(), "PRP");
//! assert_eq!(reconstruct(sentence.tokens()), "The apple was his.");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod ner;
pub mod pipeline;
pub mod tables;
pub mod tagger;
pub mod tokenizer;

pub use config::PipelineConfig;
pub use error::{NlpError, Result};
pub use ner::Gazetteer;
pub use pipeline::RuleBasedPipeline;
