//! List command implementation

use super::ListCommands;
use crate::cli::GlobalArgs;
use crate::lexicon_source::LexiconSource;
use crate::output::OutputFormat;
use anyhow::Result;
use genderalize_core::replacer::lookup_pronoun;
use genderalize_core::{FineTag, Gender, Lexicon};
use std::io::{self, Write};

/// Pronouns that have a swap entry
const PRONOUNS: [&str; 8] = [
    "he", "him", "himself", "his", "she", "her", "hers", "herself",
];

/// Execute a list subcommand
pub fn execute(subcommand: &ListCommands, global: &GlobalArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    match subcommand {
        ListCommands::Formats => list_formats(&mut out),
        ListCommands::Pronouns => list_pronouns(&mut out),
        ListCommands::Labels => {
            let config = global.load_config()?;
            let source = LexiconSource::resolve(global.lexicon.as_deref(), &config)?;
            writeln!(out, "Lexicon: {}", source.display_name())?;
            list_labels(&*source.load()?, &mut out)
        }
    }
}

fn list_formats<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(out, "  {:<10} - {}", format.as_str(), format.description())?;
    }
    Ok(())
}

fn list_pronouns<W: Write>(out: &mut W) -> Result<()> {
    for (tag, title) in [
        (FineTag::PersonalPronoun, "Personal pronouns (PRP):"),
        (FineTag::PossessivePronoun, "Possessive pronouns (PRP$):"),
    ] {
        writeln!(out, "{title}")?;
        for pronoun in PRONOUNS {
            if let Some(swap) = lookup_pronoun(&tag, pronoun) {
                writeln!(out, "  {pronoun:<8} -> {swap}")?;
            }
        }
    }
    Ok(())
}

fn list_labels<W: Write>(lexicon: &Lexicon, out: &mut W) -> Result<()> {
    let counts = lexicon.counts();
    for (gender, count) in [
        (Gender::Masculine, counts.masculine),
        (Gender::Feminine, counts.feminine),
        (Gender::Neuter, counts.neuter),
    ] {
        writeln!(out, "  {}  {:<10} {count}", gender.label(), gender.name())?;
    }
    writeln!(out, "  total         {}", counts.total())?;
    Ok(())
}
