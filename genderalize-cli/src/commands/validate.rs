//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use genderalize_core::Lexicon;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short = 'l', long = "file", value_name = "FILE", required = true)]
    pub file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.run(&mut io::stdout().lock())
    }

    /// Load the lexicon and report its label counts to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Validating lexicon: {}", self.file.display())?;

        match Lexicon::from_file(&self.file) {
            Ok(lexicon) => {
                let counts = lexicon.counts();
                writeln!(out, "✓ Lexicon is valid!")?;
                writeln!(out, "  Entries:   {}", counts.total())?;
                writeln!(out, "  Masculine: {}", counts.masculine)?;
                writeln!(out, "  Feminine:  {}", counts.feminine)?;
                writeln!(out, "  Neuter:    {}", counts.neuter)?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "✗ Lexicon is invalid!")?;
                writeln!(out, "  Error: {e}")?;
                Err(CliError::InvalidLexicon(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> (Result<()>, String) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {
            file: file.path().to_path_buf(),
        };
        let mut out = Vec::new();
        let result = args.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            file: PathBuf::from("words.json"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("words.json"));
    }

    #[test]
    fn test_validate_valid_lexicon() {
        let (result, output) = validate(r#"{"king": "m", "queen": "f", "monarch": "n"}"#);
        assert!(result.is_ok());
        assert!(output.contains("✓ Lexicon is valid!"));
        assert!(output.contains("Entries:   3"));
        assert!(output.contains("Masculine: 1"));
    }

    #[test]
    fn test_validate_invalid_label() {
        let (result, output) = validate(r#"{"king": "x"}"#);
        assert!(output.contains("✗ Lexicon is invalid!"));
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_validate_malformed_json() {
        let (result, output) = validate("{not json");
        assert!(result.is_err());
        assert!(output.contains("Error:"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            file: PathBuf::from("/nonexistent/words.json"),
        };
        assert!(args.run(&mut Vec::new()).is_err());
    }
}
