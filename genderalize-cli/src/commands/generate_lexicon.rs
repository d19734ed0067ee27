//! Generate lexicon command implementation

use anyhow::{Context, Result};
use clap::Args;
use genderalize_core::Lexicon;
use std::fs;
use std::path::PathBuf;

/// Entries of the starter lexicon
const STARTER_ENTRIES: [(&str, &str); 8] = [
    ("man", "m"),
    ("woman", "f"),
    ("person", "n"),
    ("father", "m"),
    ("mother", "f"),
    ("parent", "n"),
    ("great uncle", "m"),
    ("great aunt", "f"),
];

/// Arguments for the generate-lexicon command
#[derive(Debug, Args)]
pub struct GenerateLexiconArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Write the complete built-in lexicon instead of a starter
    #[arg(long)]
    pub full: bool,
}

impl GenerateLexiconArgs {
    /// Execute the generate-lexicon command
    pub fn execute(&self) -> Result<()> {
        println!("Generating lexicon...");
        println!("  Output file: {}", self.output.display());

        let lexicon = self.lexicon()?;
        fs::write(&self.output, lexicon.to_json_pretty()? + "\n")
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon with {} entries generated successfully!", lexicon.len());
        println!();
        println!("Next steps:");
        println!("1. Edit the file; labels are \"m\", \"f\" or \"n\"");
        println!("2. Validate your lexicon:");
        println!("   genderalize validate --file {}", self.output.display());
        println!("3. Use it for detection:");
        println!(
            "   genderalize detect --lexicon {} \"A nurse should look after her patients.\"",
            self.output.display()
        );

        Ok(())
    }

    /// The lexicon to write
    fn lexicon(&self) -> Result<Lexicon> {
        if self.full {
            return Ok((*Lexicon::embedded()).clone());
        }
        Ok(Lexicon::from_entries(STARTER_ENTRIES)?)
    }
}
