//! Genderalize CLI library
//!
//! This library provides the command-line interface for detecting and
//! rewriting gender generalizations.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon_source;
pub mod output;
pub mod progress;

pub use cli::{Cli, GlobalArgs};
pub use error::{CliError, CliResult};
