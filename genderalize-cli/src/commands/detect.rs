//! Detect command implementation

use crate::cli::GlobalArgs;
use crate::output::flag;
use anyhow::Result;
use clap::Args;
use genderalize_api::{Genderalizer, TextPayload};
use std::io::{self, Write};

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: DetectFormat,
}

/// Output formats of the detect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DetectFormat {
    /// `True` or `False`
    Text,
    /// `{"generalization": bool}`
    Json,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let genderalizer = global.genderalizer(&config, false)?;
        self.run(&genderalizer, &mut io::stdout().lock())
    }

    /// Classify the text and write the verdict to `out`
    pub fn run<W: Write>(&self, genderalizer: &Genderalizer, out: &mut W) -> Result<()> {
        let biases = genderalizer.biases(&TextPayload::new(self.text.as_str()));
        log::info!("generalization: {}", biases.generalization);

        match self.format {
            DetectFormat::Text => writeln!(out, "{}", flag(biases.generalization))?,
            DetectFormat::Json => writeln!(out, "{}", serde_json::to_string(&biases)?)?,
        }

        Ok(())
    }
}
