//! CLI command implementations

use crate::cli::GlobalArgs;
use crate::output::DocumentRecord;
use anyhow::Result;
use clap::Subcommand;
use genderalize_api::{Gender, Genderalizer};

pub mod analyze;
pub mod batch;
pub mod change;
pub mod detect;
pub mod generate_lexicon;
pub mod list;
pub mod validate;

pub use change::GenderArg;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print whether a text is a gender generalization
    Detect(detect::DetectArgs),

    /// Rewrite the gendered pronouns of a generalization
    Change(change::ChangeArgs),

    /// Print the four classification facts for each text
    Analyze(analyze::AnalyzeArgs),

    /// Analyze every line of one or more files
    Batch(batch::BatchArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write a lexicon file to start from
    GenerateLexicon(generate_lexicon::GenerateLexiconArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the pronoun swap tables
    Pronouns,

    /// List lexicon label counts
    Labels,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        log::debug!("Command: {self:?}");
        match self {
            Commands::Detect(args) => args.execute(global),
            Commands::Change(args) => args.execute(global),
            Commands::Analyze(args) => args.execute(global),
            Commands::Batch(args) => args.execute(global),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateLexicon(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand, global),
        }
    }
}

/// Analyze one document, rewriting it when `target` is set
pub(crate) fn build_record(
    genderalizer: &Genderalizer,
    source: Option<String>,
    text: &str,
    target: Option<Gender>,
) -> Result<DocumentRecord> {
    let analysis = genderalizer.analyze(text);
    let rewritten = match target {
        Some(target) => Some(genderalizer.change(target, text)?),
        None => None,
    };

    Ok(DocumentRecord {
        source,
        analysis,
        rewritten,
    })
}
