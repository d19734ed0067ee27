//! Change command implementation

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use clap::Args;
use genderalize_api::{Gender, Genderalizer};
use std::io::{self, Write};

/// Arguments for the change command
#[derive(Debug, Args)]
pub struct ChangeArgs {
    /// Target gender of the pronouns
    #[arg(value_enum, value_name = "GENDER")]
    pub gender: GenderArg,

    /// Text to rewrite
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Rewrite the text even when it is not a gender generalization
    #[arg(short, long)]
    pub all: bool,
}

/// Rewrite target on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GenderArg {
    /// Masculine pronouns
    #[value(name = "m", alias = "masculine")]
    Masculine,
    /// Feminine pronouns
    #[value(name = "f", alias = "feminine")]
    Feminine,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Masculine => Gender::Masculine,
            GenderArg::Feminine => Gender::Feminine,
        }
    }
}

impl ChangeArgs {
    /// Execute the change command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let genderalizer = global.genderalizer(&config, self.all)?;
        self.run(&genderalizer, &mut io::stdout().lock())
    }

    /// Rewrite the text and write it to `out`
    pub fn run<W: Write>(&self, genderalizer: &Genderalizer, out: &mut W) -> Result<()> {
        let target = Gender::from(self.gender);
        let changed = genderalizer
            .change(target, &self.text)
            .with_context(|| format!("Failed to rewrite towards '{}'", target.name()))?;

        if changed == self.text {
            log::info!("Text left unchanged");
        }
        writeln!(out, "{changed}")?;

        Ok(())
    }
}
